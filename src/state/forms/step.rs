//! Waitlist form steps and their fixed option lists

use super::validation::{self, ValidationError};

/// Business sectors offered in the sector step
pub const SECTOR_OPTIONS: &[&str] = &[
    "Tecnología",
    "Finanzas",
    "Salud",
    "Educación",
    "Retail",
    "Manufactura",
    "Servicios",
    "Otro",
];

/// Company sizes offered in the size step
pub const SIZE_OPTIONS: &[&str] = &[
    "1-10 empleados",
    "11-50 empleados",
    "51-200 empleados",
    "201-500 empleados",
    "500+ empleados",
    "No aplica",
];

/// How a step collects its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Free text entry
    Text,
    /// Choice from a fixed option list
    Select(&'static [&'static str]),
}

/// Identifies one field-collection stage of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Email,
    Phone,
    Company,
    Sector,
    Size,
}

impl StepId {
    /// Field id used for the lead mapping
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Sector => "sector",
            Self::Size => "size",
        }
    }

    /// Question shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Correo electrónico",
            Self::Phone => "Teléfono de contacto",
            Self::Company => "Nombre de la empresa",
            Self::Sector => "Sector de la empresa",
            Self::Size => "Tamaño de la empresa",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "tucorreo@gmail.com",
            Self::Phone => "+57 300 123 4567",
            Self::Company => "Mi Empresa S.A.S.",
            Self::Sector => "Selecciona un sector",
            Self::Size => "Selecciona el tamaño",
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Self::Email | Self::Phone | Self::Company => StepKind::Text,
            Self::Sector => StepKind::Select(SECTOR_OPTIONS),
            Self::Size => StepKind::Select(SIZE_OPTIONS),
        }
    }

    /// Run this step's validator against a value
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Email => validation::validate_email(value),
            Self::Phone => validation::validate_phone(value),
            Self::Company => validation::validate_company(value),
            Self::Sector => validation::validate_sector(value),
            Self::Size => validation::validate_size(value),
        }
    }
}

/// Which set of steps the form walks through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// Email, company, sector, size
    Standard,
    /// Email, phone, company, sector, size
    #[default]
    WithPhone,
}

impl FormVariant {
    pub fn from_collect_phone(collect_phone: bool) -> Self {
        if collect_phone {
            Self::WithPhone
        } else {
            Self::Standard
        }
    }

    /// Step order for this variant
    pub fn steps(&self) -> &'static [StepId] {
        match self {
            Self::Standard => &[StepId::Email, StepId::Company, StepId::Sector, StepId::Size],
            Self::WithPhone => &[
                StepId::Email,
                StepId::Phone,
                StepId::Company,
                StepId::Sector,
                StepId::Size,
            ],
        }
    }
}
