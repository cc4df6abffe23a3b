//! Ordered in-memory collection of test cases owned by a page

use chrono::Utc;
use rand::Rng;

use crate::models::{FieldValue, TestCase, TestCaseField, TestCaseId, TestCasePayload};

/// Mints strictly increasing ids from the wall clock
///
/// Ids requested within the same nanosecond (bulk import) are bumped past the
/// last id with a small random gap.
#[derive(Debug, Default)]
struct IdMinter {
    last: u64,
}

impl IdMinter {
    fn mint(&mut self) -> TestCaseId {
        let now = Utc::now()
            .timestamp_nanos_opt()
            .map(|nanos| nanos.max(0) as u64)
            .unwrap_or(0);
        self.mint_at(now)
    }

    fn mint_at(&mut self, now: u64) -> TestCaseId {
        let next = if now > self.last {
            now
        } else {
            self.last + 1 + rand::rng().random_range(0..1_000)
        };
        self.last = next;
        TestCaseId(next)
    }
}

/// Test cases in insertion order
///
/// All mutation goes through [`add`](Self::add), [`remove`](Self::remove) and
/// [`update`](Self::update); readers get a shared slice from [`list`](Self::list).
#[derive(Debug, Default)]
pub struct TestCaseCollection {
    cases: Vec<TestCase>,
    minter: IdMinter,
}

impl TestCaseCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank test case and return its id
    pub fn add(&mut self) -> TestCaseId {
        let id = self.minter.mint();
        self.cases.push(TestCase::blank(id));
        id
    }

    /// Append a test case with the given contents (importer entry point)
    pub(crate) fn push_filled(
        &mut self,
        input: String,
        expected_output: String,
        is_sample: bool,
        is_hidden: bool,
    ) -> TestCaseId {
        let id = self.minter.mint();
        self.cases.push(TestCase {
            id,
            input,
            expected_output,
            is_sample,
            is_hidden,
        });
        id
    }

    /// Remove the test case with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: TestCaseId) -> bool {
        let before = self.cases.len();
        self.cases.retain(|tc| tc.id != id);
        before != self.cases.len()
    }

    /// Overwrite a single field. Unknown ids and mismatched value kinds are ignored.
    pub fn update(&mut self, id: TestCaseId, field: TestCaseField, value: FieldValue) -> bool {
        match self.cases.iter_mut().find(|tc| tc.id == id) {
            Some(tc) => tc.set_field(field, value),
            None => false,
        }
    }

    pub fn get(&self, id: TestCaseId) -> Option<&TestCase> {
        self.cases.iter().find(|tc| tc.id == id)
    }

    pub fn list(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Normalized submission payload; flags pass through unchanged
    pub fn to_payload(&self) -> Vec<TestCasePayload> {
        self.cases.iter().map(TestCase::to_payload).collect()
    }
}
