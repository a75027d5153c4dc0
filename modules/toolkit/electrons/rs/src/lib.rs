pub use batch::{compute_batch, from_reader, Batch, Row};
pub use composition::Composition;
pub use config::Config;
pub use electrons::{
    base_electrons, compute, Breakdown, Contribution, Electrons, BACKBONE_ELECTRONS,
    BASE_PAIR_ELECTRONS, DEOXYRIBOSE_ELECTRONS, PHOSPHATE_CHARGE_ELECTRONS, PHOSPHATE_ELECTRONS,
};
pub use error::{BatchError, InvalidInput, MAX_REPORTED_POSITIONS};

mod batch;
mod composition;
mod config;
mod electrons;
mod error;
