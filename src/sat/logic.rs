//! The B3/S23 transition relation and its prime implicant clause table.
//!
//! A transition is a 10-bit word: the 9 low bits are the 3x3 neighborhood at
//! time t in row-major order (bit 4 is the center), bit 9 is the cell's state
//! at time t+1. The prime implicant table expresses the *invalid* transitions
//! as an OR of ANDs, which dualizes to the valid transitions as an AND of ORs,
//! i.e. CNF clauses directly.

use crate::error::SearchError;
use crate::sat::clause::{ClauseBuilder, ClauseList};
use std::sync::OnceLock;

/// Mask of the 8 non-center neighborhood bits (bits 0..9 minus bit 4).
const NEIGHBOR_MASK: usize = 0b1_1110_1111;

/// Bit index of the next-generation state.
pub const OUTPUT_BIT: usize = 9;

/// One CNF clause over the 10-bit transition word, as a pair of masks with
/// `force` a subset of `care`: the clause is the OR, over the set bits of
/// `care`, of "bit i equals bit i of `force`". Every valid transition
/// satisfies the clause; the assignments that violate it (disagreeing with
/// `force` on every care bit) are all invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implicant {
    pub care: u16,
    pub force: u16,
}

/// True iff the 10-bit word `w` is a valid B3/S23 transition.
pub fn transition_valid(w: usize) -> bool {
    let neighbors = (w & NEIGHBOR_MASK).count_ones();
    let center = (w >> 4) & 1 == 1;
    let next = (w >> OUTPUT_BIT) & 1 == 1;
    next == (neighbors == 3 || (center && neighbors == 2))
}

fn validity_table() -> [bool; 1024] {
    let mut table = [false; 1024];
    for (w, entry) in table.iter_mut().enumerate() {
        *entry = transition_valid(w);
    }
    table
}

fn compute_prime_implicants() -> Vec<Implicant> {
    let table = validity_table();
    let mut implicants: Vec<Implicant> = Vec::new();

    for care in 1u16..1024 {
        // Enumerate force as subsets of care, descending.
        let mut force = care;
        loop {
            // Sound iff no valid transition disagrees with force on all care
            // bits. Those assignments are exactly {x ^ force : x superset of
            // care}.
            let mut sound = true;
            let mut x = care as usize;
            while x < 1024 {
                if table[x ^ force as usize] {
                    sound = false;
                    break;
                }
                x = (x + 1) | care as usize;
            }

            if sound {
                // Keep only implicants not already implied by an accepted one
                // with a smaller care set agreeing on force.
                let implied = implicants
                    .iter()
                    .any(|imp| (imp.care & care) == imp.care && (imp.care & force) == imp.force);
                if !implied {
                    implicants.push(Implicant { care, force });
                }
            }

            if force == 0 {
                break;
            }
            force = (force - 1) & care;
        }
    }

    // The conjunction of all clauses must reproduce the transition relation
    // exactly; anything else means the enumeration above is broken.
    for (w, &valid) in table.iter().enumerate() {
        let conjunction = implicants
            .iter()
            .all(|imp| imp.care & !(w as u16 ^ imp.force) != 0);
        assert_eq!(conjunction, valid, "prime implicant table self-check failed at {w}");
    }

    implicants
}

/// The process-wide prime implicant table, computed once on first use and
/// immutable afterwards.
pub fn prime_implicants() -> &'static [Implicant] {
    static TABLE: OnceLock<Vec<Implicant>> = OnceLock::new();
    TABLE.get_or_init(compute_prime_implicants)
}

/// Emit the transition clauses for one output cell.
///
/// `cells` holds ten variable ids: the 3x3 neighborhood at time t in
/// row-major order followed by the output cell at time t+1, with the usual
/// convention 0 = known dead, 1 = known alive, >= 2 = Boolean variable
/// (literal `id - 1`). One clause is appended per prime implicant, except:
/// clauses a known cell already satisfies are dropped, tautologies are
/// dropped, and a clause falsified entirely by known cells is appended as
/// the empty clause so the formula correctly becomes unsatisfiable.
pub fn append_transition_clauses(
    cells: &[i32; 10],
    clauses: &mut ClauseList,
) -> Result<(), SearchError> {
    let mut builder = ClauseBuilder::new();
    for imp in prime_implicants() {
        let mut satisfied = false;
        for bit in 0..10 {
            if imp.care & (1 << bit) == 0 {
                continue;
            }
            let id = cells[bit];
            let force_state = imp.force & (1 << bit) != 0;
            if id < 2 {
                // Known cell: agreement with force satisfies the clause.
                if (id != 0) == force_state {
                    satisfied = true;
                }
            } else {
                let literal = if force_state { id - 1 } else { -(id - 1) };
                satisfied = builder.push(literal)?;
            }
            if satisfied {
                break;
            }
        }
        if !satisfied {
            clauses.push(builder.clause());
        }
        builder.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_evaluation() {
        // Dead cell, 3 neighbors -> born
        let w = 0b0111 | (1 << OUTPUT_BIT); // bits 0,1,2 set, center dead
        assert!(transition_valid(w));
        // Dead cell, 2 neighbors -> stays dead
        assert!(transition_valid(0b0011));
        assert!(!transition_valid(0b0011 | (1 << OUTPUT_BIT)));
        // Live cell, 2 neighbors -> survives
        let w = 0b0011 | (1 << 4);
        assert!(transition_valid(w | (1 << OUTPUT_BIT)));
        assert!(!transition_valid(w));
        // Live cell, 4 neighbors -> dies
        let w = 0b0110_0011 | (1 << 4);
        assert!(transition_valid(w));
        assert!(!transition_valid(w | (1 << OUTPUT_BIT)));
    }

    #[test]
    fn test_exactly_512_valid_transitions() {
        let count = (0..1024).filter(|&w| transition_valid(w)).count();
        assert_eq!(count, 512);
    }

    #[test]
    fn test_implicants_well_formed() {
        for imp in prime_implicants() {
            assert!(imp.care > 0 && imp.care < 1024);
            assert_eq!(imp.force & !imp.care, 0, "force must be a subset of care");
            // The fixed clause width must accommodate every implicant even
            // when all its care bits are unknown variables.
            assert!(imp.care.count_ones() <= 9);
        }
    }

    #[test]
    fn test_clause_table_matches_rule_exactly() {
        // Conjunction over all implicants agrees with the transition relation
        // on all 1024 assignments. (The initializer also asserts this; here
        // it doubles as a regression test.)
        for w in 0..1024u16 {
            let conjunction = prime_implicants()
                .iter()
                .all(|imp| imp.care & !(w ^ imp.force) != 0);
            assert_eq!(conjunction, transition_valid(w as usize));
        }
    }

    #[test]
    fn test_emission_all_known_valid_emits_nothing() {
        // Blinker row: neighborhood bits 3,4,5 alive, output alive
        let mut cells = [0i32; 10];
        cells[3] = 1;
        cells[4] = 1;
        cells[5] = 1;
        cells[9] = 1;
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_emission_all_known_invalid_emits_empty_clause() {
        // Dead neighborhood but output forced alive violates the rule
        let mut cells = [0i32; 10];
        cells[9] = 1;
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();
        assert!(clauses.iter().any(|c| c.is_empty()));
    }

    #[test]
    fn test_emission_forces_output_dead_for_dead_neighborhood() {
        // All nine neighborhood cells known dead, output unknown (id 2,
        // literal 1): the clauses must force the output false.
        let mut cells = [0i32; 10];
        cells[9] = 2;
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();
        assert!(!clauses.is_empty());
        // Unsatisfied when the output variable is true
        assert!(clauses.iter().any(|c| !c.satisfied_by(|_| true)));
        // Satisfied when it is false
        assert!(clauses.iter().all(|c| c.satisfied_by(|_| false)));
    }

    #[test]
    fn test_emission_forces_birth_on_three_neighbors() {
        // Exactly three live neighbors, output unknown: must be forced alive.
        let mut cells = [0i32; 10];
        cells[0] = 1;
        cells[1] = 1;
        cells[2] = 1;
        cells[9] = 2;
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();
        assert!(clauses.iter().all(|c| c.satisfied_by(|_| true)));
        assert!(clauses.iter().any(|c| !c.satisfied_by(|_| false)));
    }

    #[test]
    fn test_emission_no_tautologies_or_wide_clauses() {
        // Fully unknown neighborhood: ids 2..=11
        let mut cells = [0i32; 10];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = 2 + i as i32;
        }
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();
        assert!(!clauses.is_empty());
        for clause in &clauses {
            assert!(!clause.is_empty());
            assert!(clause.len() <= 9);
            let lits = clause.literals();
            for &lit in lits {
                assert!(!lits.contains(&-lit));
            }
        }
    }

    #[test]
    fn test_free_patch_accepts_exactly_valid_transitions() {
        // With all ten cells free, the emitted clauses must be satisfied by
        // exactly the 512 valid (neighborhood, output) pairs.
        let mut cells = [0i32; 10];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = 2 + i as i32; // literals 1..=10
        }
        let mut clauses = ClauseList::new();
        append_transition_clauses(&cells, &mut clauses).unwrap();

        for w in 0..1024usize {
            let assignment = |var: i32| w & (1 << (var - 1)) != 0;
            let all_satisfied = clauses.iter().all(|c| c.satisfied_by(assignment));
            assert_eq!(all_satisfied, transition_valid(w), "mismatch at word {w:#012b}");
        }
    }
}
