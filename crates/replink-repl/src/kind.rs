//! Supported playground services.

/// Playground service named by a link's pseudo-protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplKind {
    Babel,
    CodePen,
    CodeSandbox,
    Ramda,
}

impl ReplKind {
    /// All kinds, in the order their protocols are matched.
    pub const ALL: [Self; 4] = [Self::Babel, Self::CodePen, Self::CodeSandbox, Self::Ramda];

    /// Pseudo-protocol prefix for this kind.
    #[must_use]
    pub fn protocol(self) -> &'static str {
        match self {
            Self::Babel => "babel://",
            Self::CodePen => "codepen://",
            Self::CodeSandbox => "codesandbox://",
            Self::Ramda => "ramda://",
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::CodePen => "codepen",
            Self::CodeSandbox => "codesandbox",
            Self::Ramda => "ramda",
        }
    }

    /// Classify a link URL.
    ///
    /// Returns the matching kind and the URL with the protocol stripped, or
    /// `None` if the URL is not a playground link.
    ///
    /// # Examples
    ///
    /// ```
    /// use replink_repl::ReplKind;
    ///
    /// assert_eq!(
    ///     ReplKind::classify("codesandbox://app,style.css"),
    ///     Some((ReplKind::CodeSandbox, "app,style.css"))
    /// );
    /// assert_eq!(ReplKind::classify("https://example.com"), None);
    /// ```
    #[must_use]
    pub fn classify(url: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|kind| url.strip_prefix(kind.protocol()).map(|rest| (kind, rest)))
    }
}
