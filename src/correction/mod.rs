//! 체적(VCF)·압력(PCF)·셸(SCF) 보정계수 모듈 모음.

pub mod pcf;
pub mod shell;
pub mod step_table;
pub mod vcf;
pub mod vcf_table;

pub use pcf::PressureCorrectionTable;
pub use shell::{ShellCorrection, ShellCorrectionTable};
pub use vcf::CorrectionFactorGrid;
