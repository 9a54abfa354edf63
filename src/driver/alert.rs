// src/driver/alert.rs

use super::Sht3x;
use crate::common::{
    AlertLimit, AlertThreshold, Command, SensirionI2c, SensirionTimer, Sht3xAddr, Sht3xError,
};
use core::convert::TryInto;
use core::fmt::Debug;

impl<IF> Sht3x<IF>
where
    IF: SensirionI2c + SensirionTimer,
    IF::Error: Debug,
{
    /// Programs one of the four alert limits.
    ///
    /// `slot` is an [`AlertThreshold`] or its index (0..=3). An invalid index
    /// fails with [`Sht3xError::InvalidParameters`] before anything is sent.
    /// The limit is stored with reduced resolution, see
    /// [`crate::common::encode_alert_limit`].
    pub fn set_alert_threshold<S>(
        &mut self,
        address: Sht3xAddr,
        slot: S,
        limit: AlertLimit,
    ) -> Result<(), Sht3xError<IF::Error>>
    where
        S: TryInto<AlertThreshold>,
    {
        let slot = slot
            .try_into()
            .map_err(|_| Sht3xError::<IF::Error>::InvalidParameters)?;
        let word = limit.encode();
        debug!(
            "sht3x@{:#x}: alert limit {:#x} <- {:#x}",
            address.as_u8(),
            Command::WriteAlertLimit(slot).code(),
            word
        );
        self.interface.write_command_with_args(
            address.as_u8(),
            Command::WriteAlertLimit(slot).code(),
            &[word],
        )
    }

    /// Reads back one of the four alert limits.
    pub fn get_alert_threshold<S>(
        &mut self,
        address: Sht3xAddr,
        slot: S,
    ) -> Result<AlertLimit, Sht3xError<IF::Error>>
    where
        S: TryInto<AlertThreshold>,
    {
        let slot = slot
            .try_into()
            .map_err(|_| Sht3xError::<IF::Error>::InvalidParameters)?;
        let mut word = [0u16; 1];
        self.interface.read_command(
            address.as_u8(),
            Command::ReadAlertLimit(slot).code(),
            &mut word,
        )?;
        Ok(AlertLimit::decode(word[0]))
    }
}
