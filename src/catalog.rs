// src/catalog.rs

//! The fixed catalog of global objects built into the PLCnext Technology
//! platform. These are signal sources and sinks that exist on every
//! controller independently of the loaded project.

use crate::types::{Node, Port};

/// Returns the built-in global objects: the Axioline and Profinet I/O
/// function blocks, the ESM status block and the Eclr runtime.
///
/// The table is fixed and its keys are stable across calls. The Eclr
/// entry's ports mirror the other objects' ports, since the runtime is the
/// counterpart of every built-in signal.
pub fn global_objects() -> Vec<Node> {
    let axlc = axlc();
    let pnc = pnc();
    let pnd = pnd();
    let esm = esm();

    let eclr = Node {
        key: "Arp.Plc.Eclr/".into(),
        name: "Eclr".into(),
        left: [&axlc.right, &pnc.right, &pnd.right, &esm.right]
            .into_iter()
            .flatten()
            .cloned()
            .collect(),
        right: [&pnc.left, &pnd.left].into_iter().flatten().cloned().collect(),
    };

    vec![axlc, pnc, pnd, esm, eclr]
}

fn axlc() -> Node {
    Node {
        key: "Arp.Io.FbIo.AxlC/".into(),
        name: "AxlC".into(),
        left: Vec::new(),
        right: AXIO_DIAG_REGISTERS
            .iter()
            .map(|id| Port::new(*id, "uint16"))
            .collect(),
    }
}

const AXIO_DIAG_REGISTERS: [&str; 13] = [
    "AXIO_DIAG_STATUS_REG_HI",
    "AXIO_DIAG_STATUS_REG_LOW",
    "AXIO_DIAG_PARAM_REG_HI",
    "AXIO_DIAG_PARAM_REG_LOW",
    "AXIO_DIAG_PARAM_2_REG_HI",
    "AXIO_DIAG_PARAM_2_REG_LOW",
    "AXIO_DIAG_STATUS_REG_PF",
    "AXIO_DIAG_STATUS_REG_BUS",
    "AXIO_DIAG_STATUS_REG_RUN",
    "AXIO_DIAG_STATUS_REG_ACT",
    "AXIO_DIAG_STATUS_REG_RDY",
    "AXIO_DIAG_STATUS_REG_SYSFAIL",
    "AXIO_DIAG_STATUS_REG_PW",
];

fn pnc() -> Node {
    Node {
        key: "Arp.Io.FbIo.PnC/".into(),
        name: "PnC".into(),
        left: vec![Port::new("PNIO_FORCE_FAILSAFE", "bit")],
        right: [
            "PNIO_SYSTEM_BF",
            "PNIO_SYSTEM_SF",
            "PNIO_MAINTENANCE_DEMANDED",
            "PNIO_MAINTENANCE_REQUIRED",
            "PNIO_CONFIG_STATUS",
            "PNIO_CONFIG_STATUS_ACTIVE",
            "PNIO_CONFIG_STATUS_READY",
            "PNIO_CONFIG_STATUS_CFG_FAULT",
        ]
        .iter()
        .map(|id| Port::new(*id, "bit"))
        .collect(),
    }
}

fn pnd() -> Node {
    Node {
        key: "Arp.Io.FbIo.PnD/".into(),
        name: "PnD".into(),
        left: vec![Port::new("PND_S1_OUTPUTS", "uint16")],
        right: vec![
            Port::new("PND_S1_PLC_RUN", "bit"),
            Port::new("PND_S1_VALID_DATA_CYCLE", "bit"),
            Port::new("PND_S1_OUTPUT_STATUS_GOOD", "bit"),
            Port::new("PND_S1_INPUT_STATUS_GOOD", "bit"),
            Port::new("PND_S1_DATA_LENGTH", "uint16"),
            Port::new("PND_S1_INPUTS", "uint16"),
        ],
    }
}

fn esm() -> Node {
    let mut right = vec![Port::new("ESM_COUNT", "uint16")];
    for esm in 1..=2 {
        right.push(Port::new(format!("ESM_{}_TASKS_USED", esm), "uint16"));
        for task in 1..=16 {
            right.push(Port::new(format!("ESM_{}_TASK_{}", esm, task), "bit"));
        }
    }

    Node {
        key: "Arp.Plc.Esm/".into(),
        name: "Esm".into(),
        left: Vec::new(),
        right,
    }
}

#[cfg(test)]
mod tests {
    use super::global_objects;

    #[test]
    fn catalog_has_five_stable_entries() {
        let objects = global_objects();
        assert_eq!(objects.len(), 5);

        let keys: Vec<&str> = objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "Arp.Io.FbIo.AxlC/",
                "Arp.Io.FbIo.PnC/",
                "Arp.Io.FbIo.PnD/",
                "Arp.Plc.Esm/",
                "Arp.Plc.Eclr/",
            ]
        );

        // A second call produces the identical table.
        assert_eq!(global_objects(), objects);
    }

    #[test]
    fn eclr_mirrors_the_other_objects() {
        let objects = global_objects();
        let eclr = &objects[4];

        // 13 Axioline + 8 Profinet controller + 6 Profinet device + 35 ESM.
        assert_eq!(eclr.left.len(), 62);
        assert_eq!(eclr.right.len(), 2);
        assert_eq!(eclr.left[0].port_id, "AXIO_DIAG_STATUS_REG_HI");
        assert_eq!(eclr.right[0].port_id, "PNIO_FORCE_FAILSAFE");
        assert_eq!(eclr.right[1].port_id, "PND_S1_OUTPUTS");
    }

    #[test]
    fn esm_block_exposes_both_managers() {
        let objects = global_objects();
        let esm = &objects[3];
        assert_eq!(esm.right.len(), 35);
        assert_eq!(esm.right[0].port_id, "ESM_COUNT");
        assert_eq!(esm.right[1].port_id, "ESM_1_TASKS_USED");
        assert_eq!(esm.right[18].port_id, "ESM_2_TASKS_USED");
        assert_eq!(esm.right[34].port_id, "ESM_2_TASK_16");
    }
}
