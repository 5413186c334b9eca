//! Requirement-by-requirement validation.

use std::collections::HashMap;

use crate::manifest::Requirement;
use crate::site::InstalledPackage;

use super::verdict::{CheckOutcome, Verdict};

/// Validate each requirement against the installed-package map, in manifest
/// order. Lookup goes through canonical keys, so formatting variance between
/// the manifest and the metadata source does not matter.
pub fn validate(
    requirements: &[Requirement],
    installed: &HashMap<String, InstalledPackage>,
) -> Vec<CheckOutcome> {
    requirements
        .iter()
        .map(|req| {
            let verdict = match installed.get(&req.key) {
                Some(package) => {
                    if req.specifiers.matches(&package.version) {
                        Verdict::Compatible {
                            installed: package.version.clone(),
                        }
                    } else {
                        Verdict::Incompatible {
                            installed: package.version.clone(),
                        }
                    }
                }
                None => Verdict::NotInstalled,
            };
            CheckOutcome {
                requirement: req.clone(),
                verdict,
            }
        })
        .collect()
}
