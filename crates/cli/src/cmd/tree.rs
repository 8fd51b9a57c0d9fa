//! Tree command implementation.

use std::path::Path;

use mdscan_core::tree;

use crate::TreeArgs;
use crate::logging;

/// Run the tree command: print the outline to stdout.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: TreeArgs) {
    let rc = super::load_config(config, profile);
    logging::init(&rc);

    let vault = super::resolve_vault(args.vault, &rc);
    let crawler = super::build_crawler(&vault, &rc);
    let scan = super::crawl_or_exit(&crawler);

    let rendered = match args.root {
        Some(name) => {
            if !scan.forest.contains(&name) {
                eprintln!("Note not found in vault: {}", name);
                std::process::exit(1);
            }
            tree::render_subtree(&scan.forest, &scan.notes, &name)
        }
        None => scan.render_tree(),
    };

    print!("{}", rendered);
}
