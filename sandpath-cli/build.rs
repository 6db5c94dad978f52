//! Renders `sandpath.1` into `$OUT_DIR/man` with clap_mangen.
//!
//! The command tree below mirrors src/cli.rs by hand; a build script cannot
//! import from the crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("sandpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify and resolve sandboxed application paths")
        .long_about(
            "Command-line tool for classifying, normalizing and resolving paths inside an \
             application sandbox and its resource bundle",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.sandpath/config.yaml")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("container")
                .long("container")
                .help("Application container holding Documents, Library and tmp")
                .value_name("DIR")
                .global(true)
                .env("SANDPATH_CONTAINER"),
        )
        .arg(
            Arg::new("bundle-dir")
                .long("bundle-dir")
                .help("Main bundle directory")
                .value_name("DIR")
                .global(true)
                .env("SANDPATH_BUNDLE_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve paths and report what is there")
                .long_about(
                    "Classify each path, map it onto the filesystem and report existence, \
                     type, access and the canonical location",
                ),
            Command::new("classify")
                .about("Print the type of each path")
                .long_about("Classify paths without touching the filesystem"),
            Command::new("normalize")
                .about("Normalize paths lexically")
                .long_about("Remove '.' segments, collapse '..' and squeeze repeated separators"),
            Command::new("readlink")
                .about("Follow a symbolic link chain to its final target")
                .long_about("Follow links with cycle detection and a hop limit"),
            Command::new("resource")
                .about("Look up a named resource in a bundle")
                .long_about(
                    "Search the bundle root, Resources/ and localization directories for a resource",
                ),
            Command::new("roots")
                .about("Show the sandbox directory roots")
                .long_about("Print the current root of every sandbox directory and the bundle"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a sandpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sandpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
