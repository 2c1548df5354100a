//! Flat parameter storage handed to the native codec

use tj_core::consts::NUM_PARAMS;
use tj_core::{TjError, TjResult};

use crate::param::{Applicability, Param, PARAMS};

/// Raw values for every parameter, keyed by ID
///
/// Writing one restart interval clears the other, so at most one of
/// `RestartBlocks` and `RestartRows` is ever nonzero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSet {
    values: [Option<i32>; NUM_PARAMS],
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            values: PARAMS.map(|info| info.default),
        }
    }
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, param: Param) -> Option<i32> {
        self.values[param as usize]
    }

    /// Look up a raw ID, rejecting unknown IDs
    pub fn get_id(&self, id: i32) -> TjResult<Option<i32>> {
        Ok(self.get(Param::try_from(id)?))
    }

    pub fn set(&mut self, param: Param, value: i32) -> TjResult<()> {
        let info = param.info();
        if info.read_only {
            return Err(TjError::IncompatibleParams("parameter is read-only"));
        }
        info.check(value)?;
        self.store(param, value);
        Ok(())
    }

    /// Set a raw ID, rejecting unknown IDs before anything is stored
    pub fn set_id(&mut self, id: i32, value: i32) -> TjResult<()> {
        self.set(Param::try_from(id)?, value)
    }

    /// Record the dimensions read from a JPEG header
    pub fn set_jpeg_dimensions(&mut self, width: i32, height: i32) -> TjResult<()> {
        Param::JpegWidth.info().check(width)?;
        Param::JpegHeight.info().check(height)?;
        self.values[Param::JpegWidth as usize] = Some(width);
        self.values[Param::JpegHeight as usize] = Some(height);
        Ok(())
    }

    fn store(&mut self, param: Param, value: i32) {
        self.values[param as usize] = Some(value);
        let cleared = match param {
            Param::RestartBlocks => Param::RestartRows,
            Param::RestartRows => Param::RestartBlocks,
            _ => return,
        };
        if value != 0 {
            self.values[cleared as usize] = Some(0);
        }
    }

    /// Parameters with a value that affect `operation`, in ID order
    pub fn applicable(&self, operation: Applicability) -> impl Iterator<Item = (Param, i32)> + '_ {
        PARAMS.iter().filter_map(move |info| {
            let value = self.values[info.param as usize]?;
            info.applies.contains(operation).then_some((info.param, value))
        })
    }
}
