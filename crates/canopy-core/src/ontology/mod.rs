pub mod edge;
pub mod section;
pub mod text_unit;

pub use edge::{Edge, RelationKind};
pub use section::{Section, SectionId};
pub use text_unit::{TextUnit, UnitId, UnitKind};
