use crate::{MatrixRow, MatrixTable, PatternName};

use crate::Mark::{No, Note};

/// Columns of the shipped matrix, in display order
pub const COLUMNS: [PatternName; 7] = [
    PatternName::Factory,
    PatternName::Strategy,
    PatternName::Decorator,
    PatternName::Observer,
    PatternName::Adapter,
    PatternName::Facade,
    PatternName::DependencyInjection,
];

pub fn matrix() -> MatrixTable {
    MatrixTable {
        rows: vec![
            MatrixRow {
                label: "Single Responsibility (SRP)",
                cells: vec![
                    ("Factory", No),
                    ("Strategy", No),
                    ("Decorator", No),
                    ("Observer", Note("Separates subject from observers")),
                    ("Adapter", No),
                    ("Facade", Note("Hides complex subsystems")),
                    ("Dependency Injection", No),
                ],
            },
            MatrixRow {
                label: "Open/Closed (OCP)",
                cells: vec![
                    ("Factory", Note("Creates objects without modifying factory")),
                    ("Strategy", Note("Adds algorithms without changing context")),
                    ("Decorator", Note("Adds behavior without changing class")),
                    ("Observer", Note("Adds observers without modifying subject")),
                    ("Adapter", Note("Adapts interface without changing client")),
                    ("Facade", No),
                    ("Dependency Injection", No),
                ],
            },
            MatrixRow {
                label: "Liskov Substitution (LSP)",
                cells: vec![
                    ("Factory", Note("Creates objects that fulfill the same contract")),
                    ("Strategy", Note("Ensures all strategies can be substituted")),
                    ("Decorator", Note("Maintains the same interface")),
                    ("Observer", No),
                    ("Adapter", Note("Ensures adapted interface works as expected")),
                    ("Facade", No),
                    ("Dependency Injection", No),
                ],
            },
            MatrixRow {
                label: "Interface Segregation (ISP)",
                cells: vec![
                    ("Factory", No),
                    ("Strategy", Note("Defines specific interfaces for algorithms")),
                    ("Decorator", No),
                    ("Observer", No),
                    ("Adapter", Note("Can adapt large interfaces to smaller ones")),
                    ("Facade", Note("Simplifies complex interfaces")),
                    ("Dependency Injection", No),
                ],
            },
            MatrixRow {
                label: "Dependency Inversion (DIP)",
                cells: vec![
                    ("Factory", Note("Depends on abstraction not concrete classes")),
                    ("Strategy", Note("Context depends on strategy interface")),
                    ("Decorator", No),
                    ("Observer", Note("Subject depends on observer interface")),
                    ("Adapter", No),
                    ("Facade", No),
                    (
                        "Dependency Injection",
                        Note("Injects dependencies rather than creating them"),
                    ),
                ],
            },
        ],
    }
}
