//! Mock I2C controller for unit tests and simulations

use std::collections::VecDeque;

use super::{I2c, I2cSettings};
use crate::errors::I2cError;

/// One transaction observed by [`MockI2c`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransaction {
    pub address: u8,
    pub data_out: Vec<u8>,
    pub data_in_len: usize,
}

/// Records every call and answers reads from a queue of canned responses
#[derive(Debug, Default)]
pub struct MockI2c {
    settings: Option<I2cSettings>,
    transactions: Vec<RecordedTransaction>,
    responses: VecDeque<Vec<u8>>,
    configure_failure: Option<I2cError>,
    transaction_failure: Option<I2cError>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by the next transaction that reads
    pub fn queue_response(&mut self, bytes: Vec<u8>) {
        self.responses.push_back(bytes);
    }

    /// Make the next `configure` call fail with `error`
    pub fn fail_next_configure(&mut self, error: I2cError) {
        self.configure_failure = Some(error);
    }

    /// Make the next `transaction` call fail with `error`
    pub fn fail_next_transaction(&mut self, error: I2cError) {
        self.transaction_failure = Some(error);
    }

    /// Settings from the last successful `configure`
    pub fn settings(&self) -> Option<I2cSettings> {
        self.settings
    }

    pub fn transactions(&self) -> &[RecordedTransaction] {
        &self.transactions
    }

    /// Responses that were queued but never consumed
    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }
}

impl I2c for MockI2c {
    type Error = I2cError;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        if let Some(error) = self.configure_failure.take() {
            return Err(error);
        }
        self.settings = Some(*settings);
        Ok(())
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.transactions.push(RecordedTransaction {
            address,
            data_out: data_out.to_vec(),
            data_in_len: data_in.len(),
        });

        if let Some(error) = self.transaction_failure.take() {
            return Err(error);
        }

        if data_in.is_empty() {
            return Ok(());
        }

        let response = self.responses.pop_front().ok_or(I2cError::NoResponse {
            address,
            len: data_in.len(),
        })?;
        if response.len() != data_in.len() {
            return Err(I2cError::ResponseLength {
                expected: data_in.len(),
                actual: response.len(),
            });
        }
        data_in.copy_from_slice(&response);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responses_are_fifo() {
        let mut mock = MockI2c::new();
        mock.queue_response(vec![1]);
        mock.queue_response(vec![2]);

        let mut buf = [0u8; 1];
        mock.transaction(0x10, &[], &mut buf).unwrap();
        assert_eq!(buf, [1]);
        mock.transaction(0x10, &[], &mut buf).unwrap();
        assert_eq!(buf, [2]);
        assert_eq!(mock.pending_responses(), 0);
    }

    #[test]
    fn test_write_only_does_not_consume_response() {
        let mut mock = MockI2c::new();
        mock.queue_response(vec![9]);
        mock.transaction(0x10, &[0x01], &mut []).unwrap();
        assert_eq!(mock.pending_responses(), 1);
    }

    #[test]
    fn test_wrong_length_response_is_error() {
        let mut mock = MockI2c::new();
        mock.queue_response(vec![1, 2, 3]);

        let mut buf = [0u8; 2];
        let result = mock.transaction(0x10, &[], &mut buf);
        assert!(matches!(
            result,
            Err(I2cError::ResponseLength { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_failures_are_one_shot() {
        let mut mock = MockI2c::new();
        mock.fail_next_configure(I2cError::Bus);

        assert!(mock.configure(&I2cSettings::FAST).is_err());
        assert_eq!(mock.settings(), None);
        assert!(mock.configure(&I2cSettings::FAST).is_ok());
        assert_eq!(mock.settings(), Some(I2cSettings::FAST));
    }

    #[test]
    fn test_failed_transaction_is_still_recorded() {
        let mut mock = MockI2c::new();
        mock.fail_next_transaction(I2cError::ArbitrationLost);

        assert!(mock.transaction(0x20, &[0xFF], &mut []).is_err());
        assert_eq!(mock.transactions().len(), 1);
    }
}
