//! Dataset loading port trait.

use crate::domain::error::OrderdeskError;
use crate::domain::order::Dataset;

pub trait OrderSource {
    fn load(&self) -> Result<Dataset, OrderdeskError>;
}
