//! Small curated markup fixtures with their expected tree outlines. The
//! corpus pins the grammar's observable behavior; the test runner feeds
//! every fixture whole and under several chunk plans.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Invariant {
    /// Whole-input ingest produces exactly the expected outline.
    TreeShape,
    /// Chunked ingest builds the same tree as whole-input ingest, up to
    /// text-run grouping.
    ChunkedEqualsWhole,
    /// Words outside every vocabulary leave no trace.
    DropsUnknownWords,
    /// A color word yields a text element carrying the color.
    ColorRunAttached,
    /// Ids named in the markup resolve through the document index.
    IndexedIdResolves,
    /// A bare attribute word sets its attribute without a value.
    SimpleWordSets,
    /// A quoted value arrives exactly as written, spaces included.
    QuotedValueVerbatim,
    /// A quad shorthand lands on all four of its slots.
    QuadFansOut,
}

impl Invariant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TreeShape => "tree shape",
            Self::ChunkedEqualsWhole => "chunked equals whole",
            Self::DropsUnknownWords => "drops unknown words",
            Self::ColorRunAttached => "color run attached",
            Self::IndexedIdResolves => "indexed id resolves",
            Self::SimpleWordSets => "simple word sets",
            Self::QuotedValueVerbatim => "quoted value verbatim",
            Self::QuadFansOut => "quad fans out",
        }
    }
}

impl std::fmt::Display for Invariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GoldenFixture {
    pub name: &'static str,
    pub markup: &'static str,
    pub covers: &'static str,
    /// Expected `outline_root` after whole-input ingest under the root.
    pub outline: &'static str,
    pub invariants: &'static [Invariant],
}

const GOLDEN_CORPUS_V1: &[GoldenFixture] = &[
    GoldenFixture {
        name: "nested_blocks",
        markup: "<div id=x><p>Hello</p></div>",
        covers: "Element nesting with an indexed id and a text run.",
        outline: "0 view (-)\n  1 div (x)\n    2 p (-)\n      Hello\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::IndexedIdResolves,
        ],
    },
    GoldenFixture {
        name: "text_around_tags",
        markup: "before<div>inside</div>after",
        covers: "Text lands on whichever element is open when its run ends.",
        outline: "0 view (-)\n  before\n  after\n  1 div (-)\n    inside\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "color_run_at_root",
        markup: "status:<blue>open</blue>.",
        covers: "A color word opens an implicit text element; its close pops.",
        outline: "0 view (-)\n  status:\n  .\n  1 text (-)\n    open\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::ColorRunAttached,
        ],
    },
    GoldenFixture {
        name: "color_run_nested",
        markup: "<p>Now:<blue>shipping</blue>-soon</p>",
        covers: "A color run keeps its place inside an open element.",
        outline: "0 view (-)\n  1 p (-)\n    Now:\n    -soon\n    2 text (-)\n      shipping\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::ColorRunAttached,
        ],
    },
    GoldenFixture {
        name: "break_terminal_creates_nothing",
        markup: "one<br/>two",
        covers: "A terminal word with nothing open closes nothing and builds nothing.",
        outline: "0 view (-)\n  one\n  two\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "break_open_nests",
        markup: "line<br>nested",
        covers: "A bare `<br>` opens and stays open like any element.",
        outline: "0 view (-)\n  line\n  1 br (-)\n    nested\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "attributes_mixed",
        markup: "<div id=a indent=4px hidden>x</div>",
        covers: "Valued pairs and a simple word inside one attribute list.",
        outline: "0 view (-)\n  1 div (a)\n    x\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::IndexedIdResolves,
            Invariant::SimpleWordSets,
        ],
    },
    GoldenFixture {
        name: "quoted_value",
        markup: "<p textface=\"Fira Sans\">q</p>",
        covers: "A quoted value carries spaces and reserved spellings.",
        outline: "0 view (-)\n  1 p (-)\n    q\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::QuotedValueVerbatim,
        ],
    },
    GoldenFixture {
        name: "unknown_words_vanish",
        markup: "<table><div class=x>kept</div></table>",
        covers: "Unknown tags and attributes drop without derailing the rest.",
        outline: "0 view (-)\n  1 div (-)\n    kept\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::DropsUnknownWords,
        ],
    },
    GoldenFixture {
        name: "list_without_closes",
        markup: "<ul><li>one<li>two",
        covers: "No auto-close: an unclosed item nests the next one.",
        outline: "0 view (-)\n  1 ul (-)\n    2 li (-)\n      one\n      3 li (-)\n        two\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "heading_levels",
        markup: "<h1>Title</h1><h2>Sub</h2><p>Body</p>",
        covers: "Sibling elements of distinct kinds under one parent.",
        outline: "0 view (-)\n  1 h1 (-)\n    Title\n  1 h2 (-)\n    Sub\n  1 p (-)\n    Body\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "geometry_words",
        markup: "<image id=logo coordinates=[0,0,32px,120px]></image>",
        covers: "A bracketed quad travels as one word and fans out.",
        outline: "0 view (-)\n  1 image (logo)\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::IndexedIdResolves,
            Invariant::QuadFansOut,
        ],
    },
    GoldenFixture {
        name: "paragraph_alias",
        markup: "<paragraph id=long>alias</paragraph>",
        covers: "`paragraph` and `p` build the same element kind.",
        outline: "0 view (-)\n  1 p (long)\n    alias\n",
        invariants: &[
            Invariant::TreeShape,
            Invariant::ChunkedEqualsWhole,
            Invariant::IndexedIdResolves,
        ],
    },
    GoldenFixture {
        name: "close_without_open",
        markup: "</div>lost?<p>found</p>",
        covers: "A close below the target is ignored, not an error.",
        outline: "0 view (-)\n  lost?\n  1 p (-)\n    found\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
    GoldenFixture {
        name: "utf8_text_passes_through",
        markup: "<p>héllo wörld</p>",
        covers: "Multi-byte text is untouched; delimiters are all ASCII.",
        outline: "0 view (-)\n  1 p (-)\n    héllo wörld\n",
        invariants: &[Invariant::TreeShape, Invariant::ChunkedEqualsWhole],
    },
];

pub fn fixtures() -> &'static [GoldenFixture] {
    GOLDEN_CORPUS_V1
}
