//! The table of demos.
//!
//! A [`Demo`] pairs a name with a function and, except for the placeholder,
//! the embedded source of the file that defines it. Docs and code listings
//! are both derived from that source.

use std::fmt;

use codeview::{
    DocstringScan, Fence, code_listing, extract_docstring, function_lines, scan_docstring,
};

use crate::demos::{self, sources};
use crate::ui::Ui;

/// Name of the placeholder entry. It has no doc, header or code panel.
pub const PLACEHOLDER: &str = "---";

/// Demo docs are inner block doc comments at the top of the body.
pub const DEMO_FENCE: Fence = Fence::INNER_BLOCK_DOC;

/// Signature every demo shares.
pub type DemoFn = fn(&mut Ui<'_>) -> anyhow::Result<()>;

/// Where a demo's code lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSource {
    /// Full text of the defining file.
    pub file: &'static str,
    /// Function name inside `file`.
    pub function: &'static str,
}

impl DemoSource {
    /// The function's lines, signature included, closing brace excluded.
    #[must_use]
    pub fn lines(&self) -> Option<Vec<&'static str>> {
        function_lines(self.file, self.function)
    }
}

/// One registry entry.
#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub run: DemoFn,
    pub source: Option<DemoSource>,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("source", &self.source.map(|source| source.function))
            .finish_non_exhaustive()
    }
}

impl Demo {
    /// True for the entry without source, shown when nothing is selected.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }

    /// Where the doc comment ends, if anywhere.
    #[must_use]
    pub fn scan(&self) -> DocstringScan {
        self.source
            .and_then(|source| source.lines())
            .map_or(DocstringScan::Absent, |lines| scan_docstring(&lines, DEMO_FENCE))
    }

    /// The cleaned doc comment.
    #[must_use]
    pub fn doc(&self) -> Option<String> {
        let lines = self.source?.lines()?;
        extract_docstring(&lines, DEMO_FENCE)
    }

    /// First line of the doc, for menus and `hello list`.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.doc()
            .and_then(|doc| doc.lines().next().map(str::to_owned))
    }

    /// The function body as shown in the code panel, shifted to column 0.
    ///
    /// Everything up to and including the doc comment is dropped, which
    /// takes the signature with it. Without a closed doc comment the whole
    /// function is shown.
    #[must_use]
    pub fn listing(&self) -> Option<String> {
        let lines = self.source?.lines()?;
        Some(code_listing(&lines, DEMO_FENCE))
    }
}

/// Ordered demo table.
#[derive(Debug, Clone)]
pub struct Registry {
    demos: Vec<Demo>,
}

impl Registry {
    #[must_use]
    pub const fn new(demos: Vec<Demo>) -> Self {
        Self { demos }
    }

    /// The gallery's demos, placeholder first.
    #[must_use]
    pub fn builtin() -> Self {
        let with_source = |name: &'static str,
                           run: DemoFn,
                           file: &'static str,
                           function: &'static str| Demo {
            name,
            run,
            source: Some(DemoSource { file, function }),
        };
        Self::new(vec![
            Demo {
                name: PLACEHOLDER,
                run: demos::intro,
                source: None,
            },
            with_source(
                "Number Generator",
                demos::random_numbers,
                sources::RANDOM_NUMBERS,
                "random_numbers",
            ),
            with_source("Sinc", demos::sinc, sources::SINC, "sinc"),
            with_source(
                "Repetitions",
                demos::repetitions,
                sources::REPETITIONS,
                "repetitions",
            ),
            with_source(
                "Progress Bar",
                demos::progress_bar,
                sources::PROGRESS_BAR,
                "progress_bar",
            ),
            with_source("Fractals", demos::fractals, sources::FRACTALS, "fractals"),
            with_source("Movies", demos::movies, sources::MOVIES, "movies"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Demo> {
        self.demos.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|demo| demo.name).collect()
    }

    /// Looks a demo up by exact name, then ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Demo> {
        self.demos
            .iter()
            .find(|demo| demo.name == name)
            .or_else(|| {
                self.demos
                    .iter()
                    .find(|demo| demo.name.eq_ignore_ascii_case(name.trim()))
            })
    }

    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Demo> {
        self.demos.get(index)
    }

    /// Index of the demo called `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        let demo = self.get(name)?;
        self.demos.iter().position(|d| d.name == demo.name)
    }

    /// A name, or an index as shown by `hello list`.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<&Demo> {
        self.get(query).or_else(|| {
            query
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| self.by_index(index))
        })
    }

    /// The entry shown when nothing is selected.
    #[must_use]
    pub fn placeholder(&self) -> Option<&Demo> {
        self.demos.iter().find(|demo| demo.is_placeholder())
    }
}
