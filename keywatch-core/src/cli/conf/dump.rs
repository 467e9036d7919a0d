use crate::conf::{DashboardConfig, load_config};
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?.config;

    if json {
        dump_json(&cfg)?;
    } else {
        dump_hcl(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_hcl(value: &DashboardConfig) -> anyhow::Result<()> {
    let s = hcl::to_string(value)?;
    println!("{s}");
    Ok(())
}
