//! EC2 instance-type catalog.
//!
//! Attributes of the instance types EMR supports, keyed by API name. See
//! <https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-supported-instance-types.html>

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Hardware attributes of a single EC2 instance type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ec2Instance {
    /// vCPU count.
    pub cpu: u32,
    /// Memory in GiB.
    pub memory: f64,
    /// Sustained clock speed in GHz (0.0 where AWS does not publish one).
    pub ghz: f64,
    /// Local instance storage in GB (0.0 for EBS-only types).
    pub storage: f64,
}

lazy_static! {
    /// Catalog of supported instance types, built once on first access.
    pub static ref EC2_INSTANCES: HashMap<&'static str, Ec2Instance> =
        CATALOG.iter().cloned().collect();
}

/// Looks up an instance type in the catalog.
pub fn instance(instance_type: &str) -> Option<&'static Ec2Instance> {
    EC2_INSTANCES.get(instance_type)
}

/// All catalog entries in their published order.
pub fn all() -> &'static [(&'static str, Ec2Instance)] {
    CATALOG
}

#[rustfmt::skip]
const CATALOG: &[(&str, Ec2Instance)] = &[
    ("t1.micro", Ec2Instance { cpu: 1, memory: 0.612, ghz: 0.0, storage: 0.0 }),
    ("t2.nano", Ec2Instance { cpu: 1, memory: 0.5, ghz: 2.4, storage: 0.0 }),
    ("t2.micro", Ec2Instance { cpu: 1, memory: 1.0, ghz: 2.5, storage: 0.0 }),
    ("t2.small", Ec2Instance { cpu: 1, memory: 2.0, ghz: 2.5, storage: 0.0 }),
    ("t2.medium", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.3, storage: 0.0 }),
    ("t2.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.3, storage: 0.0 }),
    ("t2.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.3, storage: 0.0 }),
    ("t2.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.3, storage: 0.0 }),
    ("t3.nano", Ec2Instance { cpu: 2, memory: 0.5, ghz: 2.5, storage: 0.0 }),
    ("t3.micro", Ec2Instance { cpu: 2, memory: 1.0, ghz: 2.5, storage: 0.0 }),
    ("t3.small", Ec2Instance { cpu: 2, memory: 2.0, ghz: 2.5, storage: 0.0 }),
    ("t3.medium", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.5, storage: 0.0 }),
    ("t3.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("t3.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("t3.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("a1.medium", Ec2Instance { cpu: 1, memory: 2.0, ghz: 2.3, storage: 0.0 }),
    ("a1.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.3, storage: 0.0 }),
    ("a1.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 2.3, storage: 0.0 }),
    ("a1.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 2.3, storage: 0.0 }),
    ("a1.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 2.3, storage: 0.0 }),
    ("a1.metal", Ec2Instance { cpu: 16, memory: 32.0, ghz: 2.3, storage: 0.0 }),
    ("c1.medium", Ec2Instance { cpu: 2, memory: 1.7, ghz: 0.0, storage: 350.0 }),
    ("c1.xlarge", Ec2Instance { cpu: 8, memory: 7.0, ghz: 0.0, storage: 1680.0 }),
    ("c3.large", Ec2Instance { cpu: 2, memory: 3.75, ghz: 2.8, storage: 32.0 }),
    ("c3.xlarge", Ec2Instance { cpu: 4, memory: 7.5, ghz: 2.8, storage: 80.0 }),
    ("c3.2xlarge", Ec2Instance { cpu: 8, memory: 15.0, ghz: 2.8, storage: 160.0 }),
    ("c3.4xlarge", Ec2Instance { cpu: 16, memory: 30.0, ghz: 2.8, storage: 320.0 }),
    ("c3.8xlarge", Ec2Instance { cpu: 32, memory: 60.0, ghz: 2.8, storage: 640.0 }),
    ("c4.large", Ec2Instance { cpu: 2, memory: 3.75, ghz: 2.9, storage: 0.0 }),
    ("c4.xlarge", Ec2Instance { cpu: 4, memory: 7.5, ghz: 2.9, storage: 0.0 }),
    ("c4.2xlarge", Ec2Instance { cpu: 8, memory: 15.0, ghz: 2.9, storage: 0.0 }),
    ("c4.4xlarge", Ec2Instance { cpu: 16, memory: 30.0, ghz: 2.9, storage: 0.0 }),
    ("c4.8xlarge", Ec2Instance { cpu: 36, memory: 60.0, ghz: 2.9, storage: 0.0 }),
    ("c5.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 3.4, storage: 0.0 }),
    ("c5.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 3.4, storage: 0.0 }),
    ("c5.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 3.4, storage: 0.0 }),
    ("c5.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 3.4, storage: 0.0 }),
    ("c5.9xlarge", Ec2Instance { cpu: 36, memory: 72.0, ghz: 3.4, storage: 0.0 }),
    ("c5.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 3.6, storage: 0.0 }),
    ("c5.18xlarge", Ec2Instance { cpu: 72, memory: 144.0, ghz: 3.4, storage: 0.0 }),
    ("c5.24xlarge", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.6, storage: 0.0 }),
    ("c5.metal", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.6, storage: 0.0 }),
    ("c5a.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.8xlarge", Ec2Instance { cpu: 32, memory: 64.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.16xlarge", Ec2Instance { cpu: 64, memory: 128.0, ghz: 3.3, storage: 0.0 }),
    ("c5a.24xlarge", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.3, storage: 0.0 }),
    ("c5ad.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 3.3, storage: 75.0 }),
    ("c5ad.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 3.3, storage: 150.0 }),
    ("c5ad.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 3.3, storage: 300.0 }),
    ("c5ad.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 3.3, storage: 600.0 }),
    ("c5ad.8xlarge", Ec2Instance { cpu: 32, memory: 64.0, ghz: 3.3, storage: 1200.0 }),
    ("c5ad.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 3.3, storage: 1800.0 }),
    ("c5ad.16xlarge", Ec2Instance { cpu: 64, memory: 128.0, ghz: 3.3, storage: 2400.0 }),
    ("c5ad.24xlarge", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.3, storage: 3800.0 }),
    ("c5d.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 3.4, storage: 50.0 }),
    ("c5d.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 3.4, storage: 100.0 }),
    ("c5d.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 3.4, storage: 200.0 }),
    ("c5d.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 3.4, storage: 400.0 }),
    ("c5d.9xlarge", Ec2Instance { cpu: 36, memory: 72.0, ghz: 3.4, storage: 900.0 }),
    ("c5d.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 3.6, storage: 1800.0 }),
    ("c5d.18xlarge", Ec2Instance { cpu: 72, memory: 144.0, ghz: 3.4, storage: 1800.0 }),
    ("c5d.24xlarge", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.6, storage: 3600.0 }),
    ("c5d.metal", Ec2Instance { cpu: 96, memory: 192.0, ghz: 3.6, storage: 3600.0 }),
    ("c5n.large", Ec2Instance { cpu: 2, memory: 5.3, ghz: 3.4, storage: 0.0 }),
    ("c5n.xlarge", Ec2Instance { cpu: 4, memory: 10.5, ghz: 3.4, storage: 0.0 }),
    ("c5n.2xlarge", Ec2Instance { cpu: 8, memory: 21.0, ghz: 3.4, storage: 0.0 }),
    ("c5n.4xlarge", Ec2Instance { cpu: 16, memory: 42.0, ghz: 3.4, storage: 0.0 }),
    ("c5n.9xlarge", Ec2Instance { cpu: 36, memory: 96.0, ghz: 3.4, storage: 0.0 }),
    ("c5n.18xlarge", Ec2Instance { cpu: 72, memory: 192.0, ghz: 3.4, storage: 0.0 }),
    ("c5n.metal", Ec2Instance { cpu: 72, memory: 192.0, ghz: 3.4, storage: 0.0 }),
    ("c6g.medium", Ec2Instance { cpu: 1, memory: 2.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.8xlarge", Ec2Instance { cpu: 32, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.16xlarge", Ec2Instance { cpu: 64, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("c6g.metal", Ec2Instance { cpu: 64, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("c6gd.medium", Ec2Instance { cpu: 1, memory: 2.0, ghz: 2.5, storage: 59.0 }),
    ("c6gd.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.5, storage: 118.0 }),
    ("c6gd.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 2.5, storage: 237.0 }),
    ("c6gd.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 2.5, storage: 474.0 }),
    ("c6gd.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 2.5, storage: 950.0 }),
    ("c6gd.8xlarge", Ec2Instance { cpu: 32, memory: 64.0, ghz: 2.5, storage: 1900.0 }),
    ("c6gd.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 2.5, storage: 2850.0 }),
    ("c6gd.16xlarge", Ec2Instance { cpu: 64, memory: 128.0, ghz: 2.5, storage: 3800.0 }),
    ("c6gd.metal", Ec2Instance { cpu: 64, memory: 128.0, ghz: 2.5, storage: 3800.0 }),
    ("c6gn.medium", Ec2Instance { cpu: 1, memory: 2.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.large", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.4xlarge", Ec2Instance { cpu: 16, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.8xlarge", Ec2Instance { cpu: 32, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.12xlarge", Ec2Instance { cpu: 48, memory: 96.0, ghz: 2.5, storage: 0.0 }),
    ("c6gn.16xlarge", Ec2Instance { cpu: 64, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("cc2.8xlarge", Ec2Instance { cpu: 32, memory: 60.5, ghz: 2.6, storage: 3360.0 }),
    ("d2.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.4, storage: 6144.0 }),
    ("d2.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.4, storage: 12288.0 }),
    ("d2.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.4, storage: 24576.0 }),
    ("d2.8xlarge", Ec2Instance { cpu: 36, memory: 244.0, ghz: 2.4, storage: 49152.0 }),
    ("d3.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 5940.0 }),
    ("d3.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 11880.0 }),
    ("d3.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 23760.0 }),
    ("d3.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 47520.0 }),
    ("d3en.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 3.1, storage: 27960.0 }),
    ("d3en.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 3.1, storage: 55920.0 }),
    ("d3en.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.1, storage: 111840.0 }),
    ("d3en.6xlarge", Ec2Instance { cpu: 24, memory: 96.0, ghz: 3.1, storage: 167760.0 }),
    ("d3en.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.1, storage: 223680.0 }),
    ("d3en.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 3.1, storage: 335520.0 }),
    ("f1.2xlarge", Ec2Instance { cpu: 8, memory: 122.0, ghz: 2.3, storage: 470.0 }),
    ("f1.4xlarge", Ec2Instance { cpu: 16, memory: 244.0, ghz: 2.3, storage: 940.0 }),
    ("f1.16xlarge", Ec2Instance { cpu: 64, memory: 976.0, ghz: 2.3, storage: 3760.0 }),
    ("g2.2xlarge", Ec2Instance { cpu: 8, memory: 15.0, ghz: 2.6, storage: 60.0 }),
    ("g2.8xlarge", Ec2Instance { cpu: 32, memory: 60.0, ghz: 2.6, storage: 240.0 }),
    ("g3.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.7, storage: 0.0 }),
    ("g3.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.7, storage: 0.0 }),
    ("g3.16xlarge", Ec2Instance { cpu: 64, memory: 488.0, ghz: 2.3, storage: 0.0 }),
    ("g3s.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.7, storage: 0.0 }),
    ("g4ad.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.0, storage: 600.0 }),
    ("g4ad.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.0, storage: 1200.0 }),
    ("g4ad.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 3.0, storage: 2400.0 }),
    ("g4dn.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 125.0 }),
    ("g4dn.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 225.0 }),
    ("g4dn.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.5, storage: 225.0 }),
    ("g4dn.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.5, storage: 900.0 }),
    ("g4dn.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 2.5, storage: 900.0 }),
    ("g4dn.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 900.0 }),
    ("g4dn.metal", Ec2Instance { cpu: 96, memory: 384.0, ghz: 2.5, storage: 1800.0 }),
    ("h1.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.3, storage: 2000.0 }),
    ("h1.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.3, storage: 4000.0 }),
    ("h1.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.3, storage: 8000.0 }),
    ("h1.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.3, storage: 16000.0 }),
    ("i2.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.5, storage: 800.0 }),
    ("i2.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.5, storage: 1600.0 }),
    ("i2.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.5, storage: 3200.0 }),
    ("i2.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.5, storage: 6400.0 }),
    ("i3.large", Ec2Instance { cpu: 2, memory: 15.3, ghz: 2.3, storage: 475.0 }),
    ("i3.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.3, storage: 950.0 }),
    ("i3.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.3, storage: 1900.0 }),
    ("i3.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.3, storage: 3800.0 }),
    ("i3.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.3, storage: 7600.0 }),
    ("i3.16xlarge", Ec2Instance { cpu: 64, memory: 488.0, ghz: 2.3, storage: 15200.0 }),
    ("i3.metal", Ec2Instance { cpu: 72, memory: 512.0, ghz: 2.3, storage: 15200.0 }),
    ("i3en.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 1250.0 }),
    ("i3en.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 2500.0 }),
    ("i3en.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 5000.0 }),
    ("i3en.3xlarge", Ec2Instance { cpu: 12, memory: 96.0, ghz: 3.1, storage: 7500.0 }),
    ("i3en.6xlarge", Ec2Instance { cpu: 24, memory: 192.0, ghz: 3.1, storage: 15000.0 }),
    ("i3en.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 30000.0 }),
    ("i3en.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 60000.0 }),
    ("i3en.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 60000.0 }),
    ("inf1.xlarge", Ec2Instance { cpu: 4, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("inf1.2xlarge", Ec2Instance { cpu: 8, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("inf1.6xlarge", Ec2Instance { cpu: 24, memory: 48.0, ghz: 2.5, storage: 0.0 }),
    ("inf1.24xlarge", Ec2Instance { cpu: 96, memory: 192.0, ghz: 2.5, storage: 0.0 }),
    ("m1.small", Ec2Instance { cpu: 1, memory: 1.7, ghz: 0.0, storage: 160.0 }),
    ("m1.medium", Ec2Instance { cpu: 1, memory: 3.7, ghz: 0.0, storage: 410.0 }),
    ("m1.large", Ec2Instance { cpu: 2, memory: 7.5, ghz: 0.0, storage: 840.0 }),
    ("m1.xlarge", Ec2Instance { cpu: 4, memory: 15.0, ghz: 0.0, storage: 1680.0 }),
    ("m2.xlarge", Ec2Instance { cpu: 2, memory: 17.1, ghz: 0.0, storage: 420.0 }),
    ("m2.2xlarge", Ec2Instance { cpu: 4, memory: 34.2, ghz: 0.0, storage: 850.0 }),
    ("m2.4xlarge", Ec2Instance { cpu: 8, memory: 68.4, ghz: 0.0, storage: 1680.0 }),
    ("m3.medium", Ec2Instance { cpu: 1, memory: 3.75, ghz: 2.5, storage: 4.0 }),
    ("m3.large", Ec2Instance { cpu: 2, memory: 7.5, ghz: 2.5, storage: 32.0 }),
    ("m3.xlarge", Ec2Instance { cpu: 4, memory: 15.0, ghz: 2.5, storage: 80.0 }),
    ("m3.2xlarge", Ec2Instance { cpu: 8, memory: 30.0, ghz: 2.5, storage: 160.0 }),
    ("m4.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.4, storage: 0.0 }),
    ("m4.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.4, storage: 0.0 }),
    ("m4.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.4, storage: 0.0 }),
    ("m4.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.4, storage: 0.0 }),
    ("m4.10xlarge", Ec2Instance { cpu: 40, memory: 160.0, ghz: 2.4, storage: 0.0 }),
    ("m4.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.3, storage: 0.0 }),
    ("m5.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 3.1, storage: 0.0 }),
    ("m5.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 3.1, storage: 0.0 }),
    ("m5.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 3.1, storage: 0.0 }),
    ("m5.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.1, storage: 0.0 }),
    ("m5.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.1, storage: 0.0 }),
    ("m5.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 3.1, storage: 0.0 }),
    ("m5.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 3.1, storage: 0.0 }),
    ("m5.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("m5.metal", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("m5a.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 0.0 }),
    ("m5a.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 2.5, storage: 0.0 }),
    ("m5ad.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.2, storage: 75.0 }),
    ("m5ad.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.2, storage: 150.0 }),
    ("m5ad.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.2, storage: 300.0 }),
    ("m5ad.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.2, storage: 600.0 }),
    ("m5ad.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.5, storage: 1200.0 }),
    ("m5ad.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 2.2, storage: 1800.0 }),
    ("m5ad.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 2400.0 }),
    ("m5ad.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 2.2, storage: 3600.0 }),
    ("m5d.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 3.1, storage: 75.0 }),
    ("m5d.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 3.1, storage: 150.0 }),
    ("m5d.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 3.1, storage: 300.0 }),
    ("m5d.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.1, storage: 600.0 }),
    ("m5d.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.1, storage: 1200.0 }),
    ("m5d.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 3.1, storage: 1800.0 }),
    ("m5d.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 3.1, storage: 2400.0 }),
    ("m5d.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 3600.0 }),
    ("m5d.metal", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 3600.0 }),
    ("m5dn.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 3.1, storage: 75.0 }),
    ("m5dn.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 3.1, storage: 150.0 }),
    ("m5dn.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 3.1, storage: 300.0 }),
    ("m5dn.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.1, storage: 600.0 }),
    ("m5dn.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.1, storage: 1200.0 }),
    ("m5dn.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 3.1, storage: 1800.0 }),
    ("m5dn.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 3.1, storage: 2400.0 }),
    ("m5dn.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 3600.0 }),
    ("m5dn.metal", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 3600.0 }),
    ("m5n.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.24xlarge", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("m5n.metal", Ec2Instance { cpu: 96, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("m5zn.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.3xlarge", Ec2Instance { cpu: 12, memory: 48.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.6xlarge", Ec2Instance { cpu: 24, memory: 96.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 4.5, storage: 0.0 }),
    ("m5zn.metal", Ec2Instance { cpu: 48, memory: 192.0, ghz: 4.5, storage: 0.0 }),
    ("m6g.medium", Ec2Instance { cpu: 1, memory: 4.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 0.0 }),
    ("m6g.metal", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 0.0 }),
    ("m6gd.medium", Ec2Instance { cpu: 1, memory: 4.0, ghz: 2.5, storage: 59.0 }),
    ("m6gd.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.5, storage: 118.0 }),
    ("m6gd.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 237.0 }),
    ("m6gd.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 474.0 }),
    ("m6gd.4xlarge", Ec2Instance { cpu: 16, memory: 64.0, ghz: 2.5, storage: 950.0 }),
    ("m6gd.8xlarge", Ec2Instance { cpu: 32, memory: 128.0, ghz: 2.5, storage: 1900.0 }),
    ("m6gd.12xlarge", Ec2Instance { cpu: 48, memory: 192.0, ghz: 2.5, storage: 2850.0 }),
    ("m6gd.16xlarge", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 3800.0 }),
    ("m6gd.metal", Ec2Instance { cpu: 64, memory: 256.0, ghz: 2.5, storage: 3800.0 }),
    ("mac1.metal", Ec2Instance { cpu: 12, memory: 32.0, ghz: 3.2, storage: 0.0 }),
    ("p2.xlarge", Ec2Instance { cpu: 4, memory: 61.0, ghz: 2.7, storage: 0.0 }),
    ("p2.8xlarge", Ec2Instance { cpu: 32, memory: 488.0, ghz: 2.7, storage: 0.0 }),
    ("p2.16xlarge", Ec2Instance { cpu: 64, memory: 732.0, ghz: 2.3, storage: 0.0 }),
    ("p3.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.7, storage: 0.0 }),
    ("p3.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.7, storage: 0.0 }),
    ("p3.16xlarge", Ec2Instance { cpu: 64, memory: 488.0, ghz: 2.7, storage: 0.0 }),
    ("p3dn.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 2.5, storage: 1800.0 }),
    ("p4d.24xlarge", Ec2Instance { cpu: 96, memory: 1152.0, ghz: 3.0, storage: 8000.0 }),
    ("r3.large", Ec2Instance { cpu: 2, memory: 15.0, ghz: 2.5, storage: 32.0 }),
    ("r3.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.5, storage: 80.0 }),
    ("r3.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.5, storage: 160.0 }),
    ("r3.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.5, storage: 320.0 }),
    ("r3.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.5, storage: 640.0 }),
    ("r4.large", Ec2Instance { cpu: 2, memory: 15.3, ghz: 2.3, storage: 0.0 }),
    ("r4.xlarge", Ec2Instance { cpu: 4, memory: 30.5, ghz: 2.3, storage: 0.0 }),
    ("r4.2xlarge", Ec2Instance { cpu: 8, memory: 61.0, ghz: 2.3, storage: 0.0 }),
    ("r4.4xlarge", Ec2Instance { cpu: 16, memory: 122.0, ghz: 2.3, storage: 0.0 }),
    ("r4.8xlarge", Ec2Instance { cpu: 32, memory: 244.0, ghz: 2.3, storage: 0.0 }),
    ("r4.16xlarge", Ec2Instance { cpu: 64, memory: 488.0, ghz: 2.3, storage: 0.0 }),
    ("r5.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 0.0 }),
    ("r5.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 0.0 }),
    ("r5.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 0.0 }),
    ("r5.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 0.0 }),
    ("r5.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 0.0 }),
    ("r5.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("r5.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 3.1, storage: 0.0 }),
    ("r5.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r5.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r5a.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 0.0 }),
    ("r5a.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 2.5, storage: 0.0 }),
    ("r5ad.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 2.2, storage: 75.0 }),
    ("r5ad.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 2.2, storage: 150.0 }),
    ("r5ad.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 2.2, storage: 300.0 }),
    ("r5ad.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 2.2, storage: 600.0 }),
    ("r5ad.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 2.5, storage: 1200.0 }),
    ("r5ad.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 2.2, storage: 1800.0 }),
    ("r5ad.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 2400.0 }),
    ("r5ad.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 2.2, storage: 3600.0 }),
    ("r5b.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r5b.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r5d.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 75.0 }),
    ("r5d.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 150.0 }),
    ("r5d.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 300.0 }),
    ("r5d.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 600.0 }),
    ("r5d.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 1200.0 }),
    ("r5d.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 1800.0 }),
    ("r5d.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 3.1, storage: 2400.0 }),
    ("r5d.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 3600.0 }),
    ("r5d.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 3600.0 }),
    ("r5dn.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 75.0 }),
    ("r5dn.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 150.0 }),
    ("r5dn.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 300.0 }),
    ("r5dn.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 600.0 }),
    ("r5dn.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 1200.0 }),
    ("r5dn.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 1800.0 }),
    ("r5dn.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 3.1, storage: 2400.0 }),
    ("r5dn.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 3600.0 }),
    ("r5dn.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 3600.0 }),
    ("r5n.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.24xlarge", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r5n.metal", Ec2Instance { cpu: 96, memory: 768.0, ghz: 3.1, storage: 0.0 }),
    ("r6g.medium", Ec2Instance { cpu: 1, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 0.0 }),
    ("r6g.metal", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 0.0 }),
    ("r6gd.medium", Ec2Instance { cpu: 1, memory: 8.0, ghz: 2.5, storage: 59.0 }),
    ("r6gd.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 2.5, storage: 118.0 }),
    ("r6gd.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 2.5, storage: 237.0 }),
    ("r6gd.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 2.5, storage: 474.0 }),
    ("r6gd.4xlarge", Ec2Instance { cpu: 16, memory: 128.0, ghz: 2.5, storage: 950.0 }),
    ("r6gd.8xlarge", Ec2Instance { cpu: 32, memory: 256.0, ghz: 2.5, storage: 1900.0 }),
    ("r6gd.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 2.5, storage: 2850.0 }),
    ("r6gd.16xlarge", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 3800.0 }),
    ("r6gd.metal", Ec2Instance { cpu: 64, memory: 512.0, ghz: 2.5, storage: 3800.0 }),
    ("t3a.nano", Ec2Instance { cpu: 2, memory: 0.5, ghz: 2.2, storage: 0.0 }),
    ("t3a.micro", Ec2Instance { cpu: 2, memory: 1.0, ghz: 2.2, storage: 0.0 }),
    ("t3a.small", Ec2Instance { cpu: 2, memory: 2.0, ghz: 2.2, storage: 0.0 }),
    ("t3a.medium", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.2, storage: 0.0 }),
    ("t3a.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.2, storage: 0.0 }),
    ("t3a.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.2, storage: 0.0 }),
    ("t3a.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.2, storage: 0.0 }),
    ("t4g.nano", Ec2Instance { cpu: 2, memory: 0.5, ghz: 2.5, storage: 0.0 }),
    ("t4g.micro", Ec2Instance { cpu: 2, memory: 1.0, ghz: 2.5, storage: 0.0 }),
    ("t4g.small", Ec2Instance { cpu: 2, memory: 2.0, ghz: 2.5, storage: 0.0 }),
    ("t4g.medium", Ec2Instance { cpu: 2, memory: 4.0, ghz: 2.5, storage: 0.0 }),
    ("t4g.large", Ec2Instance { cpu: 2, memory: 8.0, ghz: 2.5, storage: 0.0 }),
    ("t4g.xlarge", Ec2Instance { cpu: 4, memory: 16.0, ghz: 2.5, storage: 0.0 }),
    ("t4g.2xlarge", Ec2Instance { cpu: 8, memory: 32.0, ghz: 2.5, storage: 0.0 }),
    ("x1.16xlarge", Ec2Instance { cpu: 64, memory: 976.0, ghz: 2.3, storage: 1920.0 }),
    ("x1.32xlarge", Ec2Instance { cpu: 128, memory: 1952.0, ghz: 2.3, storage: 3840.0 }),
    ("x1e.xlarge", Ec2Instance { cpu: 4, memory: 122.0, ghz: 2.3, storage: 120.0 }),
    ("x1e.2xlarge", Ec2Instance { cpu: 8, memory: 244.0, ghz: 2.3, storage: 240.0 }),
    ("x1e.4xlarge", Ec2Instance { cpu: 16, memory: 488.0, ghz: 2.3, storage: 480.0 }),
    ("x1e.8xlarge", Ec2Instance { cpu: 32, memory: 976.0, ghz: 2.3, storage: 960.0 }),
    ("x1e.16xlarge", Ec2Instance { cpu: 64, memory: 1952.0, ghz: 2.3, storage: 1920.0 }),
    ("x1e.32xlarge", Ec2Instance { cpu: 128, memory: 3904.0, ghz: 2.3, storage: 3840.0 }),
    ("x2gd.medium", Ec2Instance { cpu: 1, memory: 16.0, ghz: 2.5, storage: 59.0 }),
    ("x2gd.large", Ec2Instance { cpu: 2, memory: 32.0, ghz: 2.5, storage: 118.0 }),
    ("x2gd.xlarge", Ec2Instance { cpu: 4, memory: 64.0, ghz: 2.5, storage: 237.0 }),
    ("x2gd.2xlarge", Ec2Instance { cpu: 8, memory: 128.0, ghz: 2.5, storage: 475.0 }),
    ("x2gd.4xlarge", Ec2Instance { cpu: 16, memory: 256.0, ghz: 2.5, storage: 950.0 }),
    ("x2gd.8xlarge", Ec2Instance { cpu: 32, memory: 512.0, ghz: 2.5, storage: 1900.0 }),
    ("x2gd.12xlarge", Ec2Instance { cpu: 48, memory: 768.0, ghz: 2.5, storage: 2850.0 }),
    ("x2gd.16xlarge", Ec2Instance { cpu: 64, memory: 1024.0, ghz: 2.5, storage: 3800.0 }),
    ("x2gd.metal", Ec2Instance { cpu: 64, memory: 1024.0, ghz: 2.5, storage: 3800.0 }),
    ("z1d.large", Ec2Instance { cpu: 2, memory: 16.0, ghz: 4.0, storage: 75.0 }),
    ("z1d.xlarge", Ec2Instance { cpu: 4, memory: 32.0, ghz: 4.0, storage: 150.0 }),
    ("z1d.2xlarge", Ec2Instance { cpu: 8, memory: 64.0, ghz: 4.0, storage: 300.0 }),
    ("z1d.3xlarge", Ec2Instance { cpu: 12, memory: 96.0, ghz: 4.0, storage: 450.0 }),
    ("z1d.6xlarge", Ec2Instance { cpu: 24, memory: 192.0, ghz: 4.0, storage: 900.0 }),
    ("z1d.12xlarge", Ec2Instance { cpu: 48, memory: 384.0, ghz: 4.0, storage: 1800.0 }),
    ("z1d.metal", Ec2Instance { cpu: 48, memory: 384.0, ghz: 4.0, storage: 1800.0 }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_instance_is_found() {
        let m5 = instance("m5.xlarge").unwrap();
        assert_eq!(m5.cpu, 4);
        assert_eq!(m5.memory, 16.0);
    }

    #[test]
    fn unknown_instance_is_absent() {
        assert!(instance("warp9.xxlarge").is_none());
    }

    #[test]
    fn catalog_has_no_duplicate_names() {
        assert_eq!(EC2_INSTANCES.len(), CATALOG.len());
    }
}
