//! UI Components
//!
//! Pieces of the CreatePoint page. All but `Header` read the form store
//! from context.

mod header;
mod items_grid;
mod locality_select;
mod point_map;

pub use header::Header;
pub use items_grid::ItemsGrid;
pub use locality_select::{CitySelect, UfSelect};
pub use point_map::PointMap;
