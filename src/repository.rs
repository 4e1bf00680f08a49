//! Read-only machine data source

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FaultEntry, MachineRecord, MachineStatus};

/// Read-only source of machine telemetry records.
///
/// Handlers depend on this trait rather than on the fixture directly, so a
/// real data store can replace [`StaticMachineRepository`] without changes to
/// the routing layer.
#[async_trait]
pub trait MachineRepository: Send + Sync {
    /// Full list of machine records, in declaration order.
    async fn list(&self) -> Result<Vec<MachineRecord>>;
}

/// Repository backed by a fixed in-memory fixture.
pub struct StaticMachineRepository {
    machines: Vec<MachineRecord>,
}

impl StaticMachineRepository {
    pub fn new() -> Self {
        Self {
            machines: mock_machines(),
        }
    }
}

impl Default for StaticMachineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MachineRepository for StaticMachineRepository {
    async fn list(&self) -> Result<Vec<MachineRecord>> {
        Ok(self.machines.clone())
    }
}

/// Mock data for two machines.
fn mock_machines() -> Vec<MachineRecord> {
    vec![
        MachineRecord {
            id: "HyPET500".to_string(),
            status: MachineStatus::Operational,
            metrics: BTreeMap::from([
                ("mold_temp_c".to_string(), 198.4),
                ("injection_pressure_bar".to_string(), 110.2),
                ("efficiency_pct".to_string(), 92.1),
            ]),
            faults: vec![
                FaultEntry {
                    code: "F001".to_string(),
                    label: "Low lubricant".to_string(),
                },
                FaultEntry {
                    code: "F017".to_string(),
                    label: "Vibration threshold".to_string(),
                },
            ],
        },
        MachineRecord {
            id: "HyPET400".to_string(),
            status: MachineStatus::Warning,
            metrics: BTreeMap::from([
                ("mold_temp_c".to_string(), 201.7),
                ("injection_pressure_bar".to_string(), 124.6),
                ("efficiency_pct".to_string(), 86.5),
            ]),
            faults: vec![FaultEntry {
                code: "F042".to_string(),
                label: "Heater drift".to_string(),
            }],
        },
    ]
}
