use std::env;

use anyhow::{Context, bail};
use flow_bake::{AssetPipeline, FlattenFlags};

const USAGE: &str = "usage: flatten <input> <out.gltf> <out.bin> [--triangles]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut flags = FlattenFlags::empty();
    args.retain(|arg| {
        if arg == "--triangles" {
            flags |= FlattenFlags::FILTER_TRIANGLES;
            false
        } else {
            true
        }
    });
    let [input, json, bin] = args.as_slice() else {
        bail!(USAGE);
    };

    let mut pipeline = AssetPipeline::new();
    let source = pipeline
        .load(input)
        .with_context(|| format!("could not load {}", input))?;
    let flat = pipeline.flatten(source, flags)?;
    pipeline
        .save(flat, json, bin)
        .with_context(|| format!("could not write {} and {}", json, bin))?;

    let view = pipeline.asset(flat)?;
    log::info!(
        "{} primitives, {} bytes of geometry",
        view.meshes().len(),
        view.buffers().first().map_or(0, |buffer| buffer.byte_length())
    );
    Ok(())
}
