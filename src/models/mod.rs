pub mod alert;
pub mod donation;
pub mod enums;
pub mod health_record;
pub mod number;
pub mod resident;
pub mod staff;
pub mod summary;

pub use alert::*;
pub use donation::*;
pub use enums::*;
pub use health_record::*;
pub use number::*;
pub use resident::*;
pub use staff::*;
pub use summary::*;
