mod scaffold_assets;

pub use scaffold_assets::{default_config, js_config_template};
