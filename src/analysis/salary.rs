// src/analysis/salary.rs
//! Salary bands: a manager should earn between `min_ratio` and `max_ratio`
//! times the average salary of their direct reports.
//!
//! The average is rounded to cents, half-up, before the band is derived; the
//! band itself is never rounded. All arithmetic is exact decimal.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use super::sink::FindingSink;
use crate::domain::{Directory, Employee};
use crate::error::{OrgError, Result};
use crate::types::{Finding, FindingKind};

/// Inclusive salary interval derived from a reports' average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBand {
    pub mean: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

impl SalaryBand {
    /// Classifies a salary against the band. Both bounds are inside it.
    #[must_use]
    pub fn assess(&self, salary: Decimal) -> Option<(FindingKind, Decimal)> {
        if salary < self.min {
            Some((FindingKind::Underpaid, self.min - salary))
        } else if salary > self.max {
            Some((FindingKind::Overpaid, salary - self.max))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SalaryBandAnalyzer {
    min_ratio: Decimal,
    max_ratio: Decimal,
}

impl SalaryBandAnalyzer {
    #[must_use]
    pub fn new(min_ratio: Decimal, max_ratio: Decimal) -> Self {
        Self {
            min_ratio,
            max_ratio,
        }
    }

    /// Band for a given average, or `None` on overflow.
    #[must_use]
    pub fn band(&self, mean: Decimal) -> Option<SalaryBand> {
        Some(SalaryBand {
            mean,
            min: mean.checked_mul(self.min_ratio)?,
            max: mean.checked_mul(self.max_ratio)?,
        })
    }

    /// Band for a manager's current direct reports.
    ///
    /// Returns `Ok(None)` when the employee is not a middle manager, i.e. has
    /// no manager of their own or no reports that resolve in `directory`.
    ///
    /// # Errors
    /// Returns [`OrgError::SalaryOverflow`] if the arithmetic overflows.
    pub fn band_for(&self, directory: &Directory, employee: &Employee) -> Result<Option<SalaryBand>> {
        if employee.is_top_of_hierarchy() || !employee.has_subordinates() {
            return Ok(None);
        }

        let salaries: Vec<Decimal> = employee
            .subordinates()
            .iter()
            .filter_map(|&id| {
                let found = directory.get(id).map(|s| s.salary);
                if found.is_none() {
                    info!(
                        manager = employee.id(),
                        subordinate = id,
                        "employee info is not available, skipping"
                    );
                }
                found
            })
            .collect();
        if salaries.is_empty() {
            return Ok(None);
        }

        let overflow = || OrgError::SalaryOverflow {
            employee: employee.id(),
        };
        let mean = mean_half_up(&salaries).ok_or_else(overflow)?;
        self.band(mean).map(Some).ok_or_else(overflow)
    }

    /// Emits an underpaid or overpaid finding for every middle manager whose
    /// salary falls outside their band.
    ///
    /// # Errors
    /// Returns [`OrgError::SalaryOverflow`] if the arithmetic overflows.
    pub fn analyze<S>(&self, directory: &Directory, sink: &mut S) -> Result<()>
    where
        S: FindingSink + ?Sized,
    {
        let mut checked = 0usize;
        for employee in directory.all_employees() {
            let Some(band) = self.band_for(directory, employee)? else {
                continue;
            };
            checked += 1;
            if let Some((kind, amount)) = band.assess(employee.salary) {
                sink.emit(Finding::salary(
                    employee.id(),
                    employee.display_name(),
                    kind,
                    amount,
                ));
            }
        }
        debug!(checked, "salary-band analysis done");
        Ok(())
    }
}

impl Default for SalaryBandAnalyzer {
    fn default() -> Self {
        Self::new(Decimal::new(12, 1), Decimal::new(15, 1))
    }
}

/// Arithmetic mean rounded to two decimal places, half away from zero.
///
/// The quotient is derived from an exact remainder, so the result does not
/// depend on the precision of decimal division. Returns `None` for an empty
/// slice or on overflow.
#[must_use]
pub fn mean_half_up(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let count = Decimal::from(values.len());
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))?;
    let negative = sum.is_sign_negative();

    // Work in cents: mean * 100 = whole + rem / count, with 0 <= rem < count.
    let scaled = sum.abs().checked_mul(Decimal::ONE_HUNDRED)?;
    let mut whole = scaled.checked_div(count)?.trunc();
    let mut rem = scaled.checked_sub(whole.checked_mul(count)?)?;
    if rem.is_sign_negative() && !rem.is_zero() {
        whole -= Decimal::ONE;
        rem += count;
    } else if rem >= count {
        whole += Decimal::ONE;
        rem -= count;
    }
    if rem.checked_mul(Decimal::TWO)? >= count {
        whole += Decimal::ONE;
    }

    let mut mean = whole.checked_div(Decimal::ONE_HUNDRED)?;
    mean.rescale(2);
    mean.set_sign_negative(negative && !mean.is_zero());
    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeId;
    use crate::hierarchy;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn emp(id: EmployeeId, salary: &str, manager: Option<EmployeeId>) -> Employee {
        Employee::new(id, "Emp", id.to_string(), dec(salary), manager)
    }

    /// CEO 1 → manager 2 → reports 3 (80000) and 4 (75000).
    fn team(manager_salary: &str) -> Directory {
        let mut d: Directory = [
            emp(1, "200000", None),
            emp(2, manager_salary, Some(1)),
            emp(3, "80000", Some(2)),
            emp(4, "75000", Some(2)),
        ]
        .into_iter()
        .collect();
        hierarchy::build(&mut d);
        d
    }

    fn run(d: &Directory) -> Vec<Finding> {
        let mut findings: Vec<Finding> = Vec::new();
        SalaryBandAnalyzer::default().analyze(d, &mut findings).unwrap();
        findings
    }

    #[test]
    fn band_from_two_reports() {
        let d = team("100000");
        let band = SalaryBandAnalyzer::default()
            .band_for(&d, d.get(2).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(band.mean, dec("77500.00"));
        assert_eq!(band.min, dec("93000.00"));
        assert_eq!(band.max, dec("116250.00"));
    }

    #[test]
    fn salary_inside_band_is_clean() {
        assert!(run(&team("116000")).is_empty());
        assert!(run(&team("93000")).is_empty());
        assert!(run(&team("116250")).is_empty());
    }

    #[test]
    fn above_band_is_overpaid() {
        let findings = run(&team("120000"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].employee_id, 2);
        assert_eq!(findings[0].kind, FindingKind::Overpaid);
        assert_eq!(findings[0].magnitude, dec("3750.00"));
    }

    #[test]
    fn below_band_is_underpaid() {
        let findings = run(&team("90000"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Underpaid);
        assert_eq!(findings[0].magnitude, dec("3000.00"));
    }

    #[test]
    fn top_of_hierarchy_and_individual_contributors_are_skipped() {
        // The CEO is far outside any band but has no manager; 3 and 4 have no reports.
        let d = team("100000");
        let analyzer = SalaryBandAnalyzer::default();
        assert_eq!(analyzer.band_for(&d, d.get(1).unwrap()).unwrap(), None);
        assert_eq!(analyzer.band_for(&d, d.get(3).unwrap()).unwrap(), None);
    }

    #[test]
    fn missing_subordinate_is_skipped() {
        let mut d = team("100000");
        d.remove(4);
        let band = SalaryBandAnalyzer::default()
            .band_for(&d, d.get(2).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(band.mean, dec("80000.00"));
    }

    #[test]
    fn mean_rounds_half_up_to_cents() {
        assert_eq!(mean_half_up(&[dec("0.01"), dec("0.02")]), Some(dec("0.02")));
        assert_eq!(mean_half_up(&[dec("10"), dec("10"), dec("11")]), Some(dec("10.33")));
        assert_eq!(mean_half_up(&[dec("10"), dec("11"), dec("11")]), Some(dec("10.67")));
        assert_eq!(mean_half_up(&[dec("1.005")]), Some(dec("1.01")));
        assert_eq!(mean_half_up(&[dec("1.0049")]), Some(dec("1.00")));
        assert_eq!(mean_half_up(&[]), None);
    }

    #[test]
    fn mean_has_two_decimal_places() {
        assert_eq!(mean_half_up(&[dec("5")]).unwrap().scale(), 2);
    }

    #[test]
    fn band_is_not_rounded() {
        let band = SalaryBandAnalyzer::default().band(dec("10.33")).unwrap();
        assert_eq!(band.min, dec("12.396"));
        assert_eq!(band.max, dec("15.495"));
    }
}
