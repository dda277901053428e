//! CodeArtifact login/logout shims around the `aws` CLI and pip.

use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::sketches::codeartifact::CodeArtifactSketchItem;

/// Logs a package tool in to the repository described by the sketch item.
pub fn login(item: &CodeArtifactSketchItem, pip: bool, twine: bool) -> Result<()> {
    if pip {
        run_login_tool(item, "pip")?;
    }
    if twine {
        run_login_tool(item, "twine")?;
    }
    Ok(())
}

/// Resets pip's global index URL. Twine has no logout; callers report that.
pub fn logout_pip() -> Result<()> {
    let status = Command::new("python")
        .args(["-m", "pip", "config", "set", "global.index-url", ""])
        .status()
        .context("couldn't run pip")?;
    if !status.success() {
        bail!("pip config set failed");
    }
    Ok(())
}

fn run_login_tool(item: &CodeArtifactSketchItem, tool: &str) -> Result<()> {
    let args = login_args(item, tool)?;
    let status = Command::new("aws")
        .args(&args)
        .status()
        .context("couldn't run the aws CLI")?;
    if !status.success() {
        bail!("aws codeartifact login --tool {tool} failed");
    }
    Ok(())
}

fn login_args(item: &CodeArtifactSketchItem, tool: &str) -> Result<Vec<String>> {
    let repository = item
        .get_repository()
        .context("codeartifact item is missing \"repository\"")?;
    let domain = item
        .get_domain()
        .context("codeartifact item is missing \"domain\"")?;
    let domain_owner = item
        .get_domain_owner()
        .context("codeartifact item is missing \"domain-owner\"")?;

    Ok(vec![
        "codeartifact".to_string(),
        "login".to_string(),
        "--tool".to_string(),
        tool.to_string(),
        "--repository".to_string(),
        repository,
        "--domain".to_string(),
        domain,
        "--domain-owner".to_string(),
        domain_owner,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_args_come_from_the_sketch_item() {
        let item = CodeArtifactSketchItem::from_value(json!({
            "repository": "internal",
            "domain": "acme",
            "domain-owner": "123456789012",
        }))
        .unwrap();

        let args = login_args(&item, "pip").unwrap();
        assert_eq!(
            args,
            vec![
                "codeartifact",
                "login",
                "--tool",
                "pip",
                "--repository",
                "internal",
                "--domain",
                "acme",
                "--domain-owner",
                "123456789012",
            ]
        );
    }

    #[test]
    fn login_args_require_all_coordinates() {
        let item = CodeArtifactSketchItem::from_value(json!({"repository": "internal"})).unwrap();
        assert!(login_args(&item, "pip").is_err());
    }
}
