use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub target_hours: f64,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, target_hours: f64) -> Self {
        Self {
            id,
            name: name.into(),
            target_hours,
        }
    }
}

/// The demo staff list the simulated table is generated for.
pub fn default_roster() -> Vec<Employee> {
    vec![
        Employee::new(101, "Juan Pérez", 8.0),
        Employee::new(102, "María López", 6.0),
        Employee::new(103, "Pedro García", 4.0),
        Employee::new(104, "Ana Martínez", 8.0),
        Employee::new(105, "Luis Sánchez", 8.0),
    ]
}
