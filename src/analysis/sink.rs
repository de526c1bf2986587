// src/analysis/sink.rs
//! Where analyzers hand their findings, in discovery order.

use crate::types::{AnalysisReport, Finding};

/// Receives findings as analyzers discover them.
pub trait FindingSink {
    fn emit(&mut self, finding: Finding);
}

impl FindingSink for Vec<Finding> {
    fn emit(&mut self, finding: Finding) {
        self.push(finding);
    }
}

impl FindingSink for AnalysisReport {
    fn emit(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

impl<S: FindingSink + ?Sized> FindingSink for &mut S {
    fn emit(&mut self, finding: Finding) {
        (**self).emit(finding);
    }
}
