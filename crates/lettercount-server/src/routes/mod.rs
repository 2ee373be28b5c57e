mod relay;

pub use relay::{relay_routes, RELAY_PATH};
