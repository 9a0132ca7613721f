//! Path value strategies
//!
//! All strategies compose proptest primitives; shrinking comes from those
//! primitives and the union, nothing here shrinks by hand.

use crate::params::PathParams;
use crate::path::PathValue;
use proptest::arbitrary::Arbitrary;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

// ============================================================================
// Content Generators
// ============================================================================

/// Arbitrary byte content, including bytes that are not valid in any text
/// encoding.
pub fn path_bytes(params: &PathParams) -> BoxedStrategy<Vec<u8>> {
    let nul_free = params.nul_free();
    vec(any::<u8>(), params.size())
        .prop_map(move |mut bytes| {
            if nul_free {
                for b in bytes.iter_mut().filter(|b| **b == 0) {
                    *b = b' ';
                }
            }
            bytes
        })
        .boxed()
}

/// Arbitrary text content.
///
/// Half the draws are arbitrary chars; the other half are arbitrary bytes
/// decoded lossily and shuffled, so replacement characters end up scattered
/// through otherwise ordinary text. For the decoded half the size range
/// bounds the byte count before decoding.
pub fn path_text(params: &PathParams) -> BoxedStrategy<String> {
    let nul_free = params.nul_free();
    let chars = vec(any::<char>(), params.size());
    let decoded = vec(any::<u8>(), params.size())
        .prop_map(|bytes| String::from_utf8_lossy(&bytes).chars().collect::<Vec<char>>())
        .prop_shuffle();

    prop_oneof![chars, decoded]
        .prop_map(move |chars: Vec<char>| -> String {
            chars
                .into_iter()
                .map(|c| if nul_free && c == '\0' { ' ' } else { c })
                .collect()
        })
        .boxed()
}

// ============================================================================
// Path Values
// ============================================================================

/// Path values with each enabled variant equally likely.
///
/// Plain bytes and plain text are always enabled; the two wrapper variants
/// only when `allow_pathlike` is set. `paths(true)` is the usual choice and
/// matches `any::<PathValue>()`.
pub fn paths(allow_pathlike: bool) -> BoxedStrategy<PathValue> {
    paths_with(PathParams::default().with_pathlike(allow_pathlike))
}

/// Path values under explicit [`PathParams`].
pub fn paths_with(params: PathParams) -> BoxedStrategy<PathValue> {
    let bytes = path_bytes(&params);
    let text = path_text(&params);

    // Plain variants come first so union shrinking moves toward them.
    if params.allow_pathlike() {
        prop_oneof![
            bytes.clone().prop_map(PathValue::Bytes),
            text.clone().prop_map(PathValue::Text),
            bytes.prop_map(PathValue::wrapped_bytes),
            text.prop_map(PathValue::wrapped_text),
        ]
        .boxed()
    } else {
        prop_oneof![
            bytes.prop_map(PathValue::Bytes),
            text.prop_map(PathValue::Text),
        ]
        .boxed()
    }
}

impl Arbitrary for PathValue {
    type Parameters = PathParams;
    type Strategy = BoxedStrategy<PathValue>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        paths_with(args)
    }
}
