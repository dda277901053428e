use anyhow::Result;
use clap::Args;
use console::style;

use awss::emr::Emr;
use awss::sketches::emr::EmrSketchItem;
use awss::sketches::Sketches;

use super::{report_sketch_error, resolve_sketch};

#[derive(Args)]
pub struct SketchArgs {
    /// Make the sketch default
    #[arg(short, long)]
    default: bool,

    /// List existing sketches
    #[arg(short, long)]
    list: bool,

    /// List the sketch's items
    #[arg(short = 'L', long)]
    list_items: bool,

    /// Create an item in the sketch (one of: emr, codeartifact, mwaa)
    #[arg(short, long, value_name = "SERVICE", conflicts_with = "remove")]
    create: Option<String>,

    /// Remove an existing item from the sketch
    #[arg(short, long, value_name = "SERVICE")]
    remove: Option<String>,

    /// Configure the emr item from an existing EMR cluster
    #[arg(long = "configure-emr", value_name = "CLUSTER_ID")]
    configure_emr: Option<String>,
}

pub async fn execute(args: SketchArgs, sketch: Option<String>) -> Result<()> {
    let sketches = Sketches::new()?;

    if args.list {
        for name in sketches.list()? {
            println!("{name}");
        }
        return Ok(());
    }

    let sketch = resolve_sketch(&sketches, sketch)?;

    if args.list_items {
        match sketches.list_items(&sketch) {
            Ok(items) => {
                for item in items {
                    println!("{item}");
                }
            }
            Err(error) => report_sketch_error(error)?,
        }
    }

    if args.default {
        match sketches.make_default(&sketch) {
            Ok(()) => println!("\"{sketch}\" was set as default"),
            Err(error) => report_sketch_error(error)?,
        }
    }

    if let Some(item_name) = &args.create {
        match sketches.add_item(&sketch, item_name) {
            Ok(path) => println!(
                "\"{item_name}\" sketch item has been added to file {}.\n{}",
                path.display(),
                style("Please fill up missing values.").dim()
            ),
            Err(error) => report_sketch_error(error)?,
        }
    }

    if let Some(item_name) = &args.remove {
        match sketches.remove_item(&sketch, item_name) {
            Ok(path) => println!(
                "\"{item_name}\" sketch item has been removed from file {}",
                path.display()
            ),
            Err(error) => report_sketch_error(error)?,
        }
    }

    if let Some(cluster_id) = &args.configure_emr {
        let region = emr_region(&sketches, &sketch);
        let emr = Emr::new(region).await;
        let item = EmrSketchItem::from_cluster(&emr, cluster_id).await?;
        match sketches.replace_item(&sketch, "emr", item.into_value()) {
            Ok(path) => println!(
                "\"emr\" sketch item has been updated in file {}.",
                path.display()
            ),
            Err(error) => report_sketch_error(error)?,
        }
    }

    Ok(())
}

/// Region pinned in the sketch's emr item, if any; the SDK's default chain
/// applies otherwise.
pub fn emr_region(sketches: &Sketches, sketch: &str) -> Option<String> {
    let content = sketches.get(sketch).ok()?;
    let item = EmrSketchItem::from_value(content.get("emr")?.clone())?;
    item.get_region()
}
