//! Reference strings for PLONK verification keys
//!
//! Setup ceremonies and transcript parsing live elsewhere; this crate only
//! exposes the verifier's view of a loaded setup and a process-wide slot
//! from which keys fetch it.

#![forbid(unsafe_code)]

pub mod crs;
pub mod factory;

pub use crs::*;
pub use factory::*;

use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrsError {
    #[error("CRS factory has not been initialized")]
    Uninitialized,
    #[error("CRS factory is already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, CrsError>;

static CRS_FACTORY: OnceCell<Arc<dyn CrsFactory>> = OnceCell::new();

/// Installs the process-wide factory. Only the first call succeeds.
pub fn init_crs_factory(factory: Arc<dyn CrsFactory>) -> Result<()> {
    CRS_FACTORY
        .set(factory)
        .map_err(|_| CrsError::AlreadyInitialized)?;
    tracing::debug!("installed process-wide CRS factory");
    Ok(())
}

/// The process-wide factory installed by [`init_crs_factory`]
pub fn get_crs_factory() -> Result<Arc<dyn CrsFactory>> {
    CRS_FACTORY.get().cloned().ok_or(CrsError::Uninitialized)
}
