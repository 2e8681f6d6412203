//! The set engine. Each input is a `LabeledLineSet`; from a slice of them we
//! compute the lines common to every set, the lines exclusive to each set, and
//! the lines shared by some but not all of the sets.
//!
//! Every set is hashed, so each membership test is `O(1)` and each operation is
//! linear in the total number of lines, however many sets there are.
use bstr::{BString, ByteSlice};
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// A line, without its line terminator. Lines are compared byte for byte and
/// sorted in byte order.
pub type Line = BString;

type LineSet = IndexSet<Line, FxBuildHasher>;

/// The lines common to every input, sorted.
pub type CommonResult = Vec<Line>;

/// For each input position, the sorted lines found in that input and no other.
pub type UniqueResult = Vec<Vec<Line>>;

/// Lines found in more than one input but not in all of them, sorted by line.
/// Each line maps to the ascending positions of the inputs containing it.
pub type PartialResult = IndexMap<Line, Vec<usize>, FxBuildHasher>;

/// The distinct non-empty lines of one input, tagged with the input's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledLineSet {
    label: String,
    lines: LineSet,
}

impl LabeledLineSet {
    /// An empty set named `label`
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        LabeledLineSet { label: label.into(), lines: LineSet::default() }
    }

    /// A set named `label` holding each of `lines`. Empty lines are skipped and
    /// repeated lines collapse into one.
    #[must_use]
    pub fn from_lines<L: AsRef<[u8]>>(
        label: impl Into<String>,
        lines: impl IntoIterator<Item = L>,
    ) -> Self {
        let mut set = LabeledLineSet::new(label);
        for line in lines {
            set.insert(line.as_ref());
        }
        set
    }

    /// Adds `line` unless it is empty or already present
    pub(crate) fn insert(&mut self, line: &[u8]) {
        if !line.is_empty() && !self.contains(line) {
            self.lines.insert(Line::from(line));
        }
    }

    /// The name of the input this set was read from
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the input had no non-empty lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact membership test: no trimming, no case folding
    #[must_use]
    pub fn contains(&self, line: impl AsRef<[u8]>) -> bool {
        self.lines.contains(line.as_ref().as_bstr())
    }

    /// The lines in the order they were first seen
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}

/// Returns the sorted lines present in every one of `sets`, or nothing if
/// `sets` is empty.
///
/// We start with the lines of the first set and, for each later set, `retain`
/// only the candidates that set contains. `IndexSet::retain` is `O(n)`, so the
/// whole calculation is linear in the total number of lines.
#[must_use]
pub fn intersect_all(sets: &[LabeledLineSet]) -> CommonResult {
    let Some((first, rest)) = sets.split_first() else { return CommonResult::new() };

    let mut candidates: IndexSet<&Line, FxBuildHasher> = first.lines.iter().collect();
    for other in rest {
        if candidates.is_empty() {
            break;
        }
        candidates.retain(|line| other.lines.contains(*line));
    }

    let mut common: CommonResult = candidates.into_iter().cloned().collect();
    common.sort_unstable();
    debug!(sets = sets.len(), common = common.len(), "intersected");
    common
}

/// Returns, for each position in `sets`, the sorted lines that occur in that
/// set and in no other. The result always has one entry per input set.
#[must_use]
pub fn exclusive_of(sets: &[LabeledLineSet]) -> UniqueResult {
    let mut unique: UniqueResult = vec![Vec::new(); sets.len()];
    for (line, found_in) in membership(sets) {
        if let [only] = found_in[..] {
            unique[only].push(line.clone());
        }
    }
    for lines in &mut unique {
        lines.sort_unstable();
    }
    debug!(unique = unique.iter().map(Vec::len).sum::<usize>(), "found exclusive lines");
    unique
}

/// Returns the lines found in more than one of `sets` but not in all of them,
/// each mapped to the positions of the sets containing it.
///
/// With fewer than three sets no line can qualify, so the result is empty.
#[must_use]
pub fn partial_overlap(sets: &[LabeledLineSet]) -> PartialResult {
    let all = sets.len();
    let mut partial: PartialResult = membership(sets)
        .into_iter()
        .filter(|(_, found_in)| found_in.len() > 1 && found_in.len() < all)
        .map(|(line, found_in)| (line.clone(), found_in))
        .collect();
    partial.sort_keys();
    debug!(partial = partial.len(), "found partially shared lines");
    partial
}

/// Maps every line of every set to the positions of the sets it occurs in.
/// Sets are visited in order and hold each line at most once, so each
/// position list is strictly ascending.
fn membership(sets: &[LabeledLineSet]) -> IndexMap<&Line, Vec<usize>, FxBuildHasher> {
    let mut found_in = IndexMap::<&Line, Vec<usize>, FxBuildHasher>::default();
    for (position, set) in sets.iter().enumerate() {
        for line in &set.lines {
            found_in.entry(line).or_default().push(position);
        }
    }
    found_in
}
