use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use cliclack::spinner;
use console::style;

use awss::emr::{ClusterSpec, Emr, StepSpec};
use awss::idle::CloudWatch;
use awss::sketches::emr::{BootstrapScript, EmrSketchItem};
use awss::sketches::Sketches;
use awss::spark;

use super::resolve_sketch;
use crate::commands::sketch::emr_region;

const DEFAULT_INSTANCE: &str = "m5.xlarge";
const DEFAULT_EMR_LABEL: &str = "emr-6.3.0";

#[derive(Subcommand)]
pub enum EmrCommand {
    /// Start an EMR cluster
    Start(StartArgs),
    /// Submit an Apache Spark step
    Submit(SubmitArgs),
    /// Terminate an EMR cluster
    Terminate(TerminateArgs),
    /// Determine whether an EMR cluster is idle
    Isidle(IsIdleArgs),
}

#[derive(Args)]
pub struct StartArgs {
    /// Cluster name (defaults to the sketch's cluster name)
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Master/core nodes instance type
    #[arg(short, long, value_name = "INSTANCE", default_value = DEFAULT_INSTANCE)]
    instance: String,

    /// EMR release label
    #[arg(short, long, value_name = "LABEL")]
    emr: Option<String>,

    /// Set the cluster as TerminationProtected
    #[arg(short, long)]
    protect: bool,

    /// Core node instances count
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    count: u32,

    /// EBS volume size in GB
    #[arg(long, value_name = "GB", default_value_t = 100)]
    size: i32,

    /// Use Spot core nodes
    #[arg(short = 'S', long)]
    spot: bool,

    /// Bootstrap scripts (paths to S3)
    #[arg(short, long, value_name = "PATH", num_args = 0..)]
    boot: Vec<String>,

    /// EMR applications
    #[arg(
        short = 'A',
        long,
        value_name = "APP",
        num_args = 0..,
        default_values_t = [
            "Spark".to_string(),
            "JupyterHub".to_string(),
            "JupyterEnterpriseGateway".to_string(),
            "Hadoop".to_string(),
            "Livy".to_string(),
        ]
    )]
    applications: Vec<String>,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Cluster ID
    #[arg(long, value_name = "ID")]
    clusterid: String,

    /// Step name
    #[arg(long, value_name = "STEP_NAME")]
    stepname: String,

    /// JAR file URI
    #[arg(long, value_name = "URI")]
    jar: Option<String>,

    /// Class to run
    #[arg(long, value_name = "CLASS")]
    classname: Option<String>,

    /// Additional python files
    #[arg(long, value_name = "PATH", num_args = 0..)]
    pyfiles: Vec<String>,

    /// Python main file
    #[arg(value_name = "PATH")]
    python_main: Option<String>,

    /// Command-line arguments
    #[arg(value_name = "ARG", num_args = 0.., trailing_var_arg = true)]
    arguments: Vec<String>,
}

#[derive(Args)]
pub struct TerminateArgs {
    /// Cluster ID
    #[arg(short, long, value_name = "ID")]
    clusterid: String,
}

#[derive(Args)]
pub struct IsIdleArgs {
    /// Cluster ID
    #[arg(short, long, value_name = "CLUSTER_ID")]
    cluster: String,

    /// Idleness time in hours
    #[arg(short, long, value_name = "HOURS", default_value_t = 2)]
    idleness: u64,
}

pub async fn execute(command: EmrCommand, sketch: Option<String>, verbose: bool) -> Result<()> {
    match command {
        EmrCommand::Start(args) => start(args, sketch, verbose).await,
        EmrCommand::Submit(args) => submit(args, sketch).await,
        EmrCommand::Terminate(args) => terminate(args, sketch).await,
        EmrCommand::Isidle(args) => isidle(args, sketch).await,
    }
}

async fn start(args: StartArgs, sketch: Option<String>, verbose: bool) -> Result<()> {
    let sketches = Sketches::new()?;
    let sketch = resolve_sketch(&sketches, sketch)?;
    let item = load_emr_item(&sketches, &sketch)?;

    let name = args
        .name
        .or_else(|| item.get_cluster_name())
        .ok_or_else(|| anyhow!("cluster name missing: pass --name or set it in the sketch"))?;
    let log_uri = item
        .get_log_uri()
        .ok_or_else(|| anyhow!("the sketch's emr item has no log_uri"))?;
    let release_label = args
        .emr
        .or_else(|| item.get_emr_label())
        .unwrap_or_else(|| DEFAULT_EMR_LABEL.to_string());

    let mut configurations = spark::spark_configurations(&args.instance, args.count)?;
    configurations.extend(spark::hdfs_site_configuration(spark::DEFAULT_DFS_REPLICATION)?);
    configurations.extend(spark::livy_configuration(spark::DEFAULT_LIVY_SESSION_TIMEOUT));
    configurations.extend(spark::emrfs_site_configuration(
        spark::DEFAULT_FS_S3_MAX_CONNECTIONS,
    )?);
    configurations.extend(spark::yarn_site_configurations(
        None,
        Some(&spark::CapacityScheduler {
            instance_type: args.instance.clone(),
            node_count: args.count,
        }),
    )?);

    if verbose {
        println!("EC2 instance: {}", args.instance);
        println!("Volume size in GB: {}", args.size);
        println!("{}", serde_json::to_string_pretty(&configurations)?);
    }

    let bootstrap_scripts = if args.boot.is_empty() {
        item.get_bootstrap_scripts()
    } else {
        args.boot
            .iter()
            .map(|path| BootstrapScript {
                name: format!("Run script: {}", path.trim()),
                path: path.clone(),
                args: vec![],
            })
            .collect()
    };

    let instance_groups = item
        .get_instance_groups()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| anyhow!("malformed instance_groups in sketch: {e}"))?;

    let spec = ClusterSpec {
        name,
        log_uri,
        keep_alive: true,
        protect: args.protect,
        applications: args.applications,
        job_flow_role: item.get_job_flow_role(),
        service_role: item.get_service_role(),
        release_label,
        master_instance: args.instance.clone(),
        core_instance: args.instance.clone(),
        node_count: args.count,
        spot: args.spot,
        volume_size_gb: args.size,
        subnets: item.get_subnets(),
        key_name: item.get_keyname(),
        security_groups: item.get_security_groups(),
        tags: item.get_tags(),
        configurations,
        bootstrap_scripts,
        steps: vec![StepSpec {
            name: "Enable debugging".to_string(),
            args: vec!["state-pusher-script".to_string()],
        }],
        instance_groups,
    };

    let emr = Emr::new(item.get_region()).await;
    let spin = spinner();
    spin.start("starting cluster");
    let result = emr.start_cluster(&spec).await;
    spin.stop("");
    let cluster_id = result?;

    println!("{cluster_id}");
    Ok(())
}

async fn submit(args: SubmitArgs, sketch: Option<String>) -> Result<()> {
    let sketches = Sketches::new()?;
    let region = resolve_sketch(&sketches, sketch)
        .ok()
        .and_then(|sketch| emr_region(&sketches, &sketch));
    let emr = Emr::new(region).await;

    let step_id = if let Some(classname) = &args.classname {
        let jar = args
            .jar
            .as_deref()
            .ok_or_else(|| anyhow!("--jar is required together with --classname"))?;
        emr.add_spark_jar_step(&args.clusterid, &args.stepname, jar, classname, &args.arguments)
            .await?
    } else if let Some(python_main) = &args.python_main {
        emr.add_spark_python_step(
            &args.clusterid,
            &args.stepname,
            python_main,
            &args.pyfiles,
            &args.arguments,
        )
        .await?
    } else {
        bail!("classname or python main file must be defined");
    };

    println!("{step_id}");
    Ok(())
}

async fn terminate(args: TerminateArgs, sketch: Option<String>) -> Result<()> {
    let sketches = Sketches::new()?;
    let region = resolve_sketch(&sketches, sketch)
        .ok()
        .and_then(|sketch| emr_region(&sketches, &sketch));
    let emr = Emr::new(region).await;
    emr.terminate_cluster(&args.clusterid).await?;
    println!("Terminated cluster {}", args.clusterid);
    Ok(())
}

async fn isidle(args: IsIdleArgs, sketch: Option<String>) -> Result<()> {
    let sketches = Sketches::new()?;
    let region = resolve_sketch(&sketches, sketch)
        .ok()
        .and_then(|sketch| emr_region(&sketches, &sketch));
    let cloudwatch = CloudWatch::new(region).await;

    let report = cloudwatch.emr_idle_report(&args.cluster, args.idleness).await?;
    if report.is_idle {
        println!("{}", style("Cluster is idle now").green());
    }
    println!("Cluster was idle for {} minutes", report.idle_minutes);
    Ok(())
}

fn load_emr_item(sketches: &Sketches, sketch: &str) -> Result<EmrSketchItem> {
    let content = sketches.get(sketch)?;
    let value = content
        .get("emr")
        .ok_or_else(|| anyhow!("sketch \"{sketch}\" has no emr item"))?;
    EmrSketchItem::from_value(value.clone())
        .ok_or_else(|| anyhow!("the emr item of sketch \"{sketch}\" is not an object"))
}
