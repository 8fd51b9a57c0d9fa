//! Doctor command: validate config resolution and print the result.

use std::path::Path;

use mdscan_core::config::loader::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   mds doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            match &rc.vault_root {
                Some(root) => println!("vault_root: {}", root.display()),
                None => println!("vault_root: (none; pass a path to `mds scan`)"),
            }
            println!("output.csv_file: {}", rc.output.csv_file);
            println!("output.tree_file: {}", rc.output.tree_file);
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL mds doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
