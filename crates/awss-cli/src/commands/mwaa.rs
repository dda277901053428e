use anyhow::{anyhow, Result};
use clap::Args;

use awss::mwaa::Mwaa;
use awss::sketches::mwaa::MwaaSketchItem;
use awss::sketches::Sketches;

use super::resolve_sketch;

#[derive(Args)]
pub struct MwaaArgs {
    /// MWAA environment (defaults to the sketch's mwaa item)
    #[arg(short, long, value_name = "NAME")]
    environment: Option<String>,

    /// MWAA CLI command
    #[arg(value_name = "COMMAND/ARG", required = true, num_args = 1..)]
    command: Vec<String>,
}

pub async fn execute(args: MwaaArgs, sketch: Option<String>) -> Result<()> {
    let environment = match args.environment {
        Some(environment) => environment,
        None => sketch_environment(sketch)
            .ok_or_else(|| anyhow!("no MWAA environment: pass --environment or set it in the sketch"))?,
    };

    let mwaa = Mwaa::new(None).await?;
    let output = mwaa
        .run_cli_command(&environment, &args.command.join(" "))
        .await?;

    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
    Ok(())
}

fn sketch_environment(sketch: Option<String>) -> Option<String> {
    let sketches = Sketches::new().ok()?;
    let sketch = resolve_sketch(&sketches, sketch).ok()?;
    let content = sketches.get(&sketch).ok()?;
    MwaaSketchItem::from_value(content.get("mwaa")?.clone())?.get_environment()
}
