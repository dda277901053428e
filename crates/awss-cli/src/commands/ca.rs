use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use awss::codeartifact;
use awss::sketches::codeartifact::CodeArtifactSketchItem;
use awss::sketches::Sketches;

use super::resolve_sketch;

#[derive(Subcommand)]
pub enum CaCommand {
    /// Log in to CodeArtifact
    Login(CaArgs),
    /// Log out from CodeArtifact
    Logout(CaArgs),
}

#[derive(Args)]
pub struct CaArgs {
    /// Configure pip
    #[arg(long)]
    pip: bool,

    /// Configure twine
    #[arg(long)]
    twine: bool,
}

pub async fn execute(command: CaCommand, sketch: Option<String>) -> Result<()> {
    match command {
        CaCommand::Login(args) => {
            let sketches = Sketches::new()?;
            let sketch = resolve_sketch(&sketches, sketch)?;
            let content = sketches.get(&sketch)?;
            let item = content
                .get("codeartifact")
                .cloned()
                .and_then(CodeArtifactSketchItem::from_value)
                .ok_or_else(|| anyhow!("sketch \"{sketch}\" has no codeartifact item"))?;
            codeartifact::login(&item, args.pip, args.twine)
        }
        CaCommand::Logout(args) => {
            if args.pip {
                codeartifact::logout_pip()?;
            }
            if args.twine {
                println!("Logging off from Twine is not supported yet!");
            }
            Ok(())
        }
    }
}
