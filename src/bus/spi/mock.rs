//! Mock SPI controller for unit tests and simulations

use std::collections::VecDeque;

use super::{Spi, SpiSettings};
use crate::errors::SpiError;

/// One transfer observed by [`MockSpi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransfer {
    pub data_out: Vec<u8>,
    pub data_in_len: usize,
    pub filler: u8,
}

/// Records every call and answers reads from a queue of canned responses
#[derive(Debug, Default)]
pub struct MockSpi {
    settings: Option<SpiSettings>,
    transfers: Vec<RecordedTransfer>,
    responses: VecDeque<Vec<u8>>,
    configure_failure: Option<SpiError>,
    transfer_failure: Option<SpiError>,
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by the next transfer that reads
    pub fn queue_response(&mut self, bytes: Vec<u8>) {
        self.responses.push_back(bytes);
    }

    pub fn fail_next_configure(&mut self, error: SpiError) {
        self.configure_failure = Some(error);
    }

    pub fn fail_next_transfer(&mut self, error: SpiError) {
        self.transfer_failure = Some(error);
    }

    pub fn settings(&self) -> Option<SpiSettings> {
        self.settings
    }

    pub fn transfers(&self) -> &[RecordedTransfer] {
        &self.transfers
    }

    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }
}

impl Spi for MockSpi {
    type Error = SpiError;

    fn configure(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        if let Some(error) = self.configure_failure.take() {
            return Err(error);
        }
        self.settings = Some(*settings);
        Ok(())
    }

    fn transfer(
        &mut self,
        data_out: &[u8],
        data_in: &mut [u8],
        filler: u8,
    ) -> Result<(), Self::Error> {
        self.transfers.push(RecordedTransfer {
            data_out: data_out.to_vec(),
            data_in_len: data_in.len(),
            filler,
        });

        if let Some(error) = self.transfer_failure.take() {
            return Err(error);
        }

        if data_in.is_empty() {
            return Ok(());
        }

        let response = self
            .responses
            .pop_front()
            .ok_or(SpiError::NoResponse { len: data_in.len() })?;
        if response.len() != data_in.len() {
            return Err(SpiError::ResponseLength {
                expected: data_in.len(),
                actual: response.len(),
            });
        }
        data_in.copy_from_slice(&response);
        Ok(())
    }
}
