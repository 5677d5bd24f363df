use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(VisitStatus {
    Waiting => "waiting",
    ExaminationDone => "examination_done",
    Paid => "paid",
});

impl VisitStatus {
    /// The only status a visit in this status may move to next.
    ///
    /// The lifecycle is strictly linear: waiting → examination_done → paid.
    pub fn next(&self) -> Option<VisitStatus> {
        match self {
            VisitStatus::Waiting => Some(VisitStatus::ExaminationDone),
            VisitStatus::ExaminationDone => Some(VisitStatus::Paid),
            VisitStatus::Paid => None,
        }
    }
}
