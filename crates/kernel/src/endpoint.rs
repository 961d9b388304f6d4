//! Endpoint vocabulary shared by the server, the modules, and the menu.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use serde::Deserialize;

/// HTTP method an endpoint answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Patch => "patch",
        }
    }
}

/// Every route the catalog can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    AllBooks,
    AvailableBooks,
    IssuedBooks,
    BookByIsbn,
    BookByTitle,
    BookByAuthor,
    AllMembers,
    MemberByUid,
    MemberByName,
    MemberByContactNum,
    MemberCurrentBook,
    MemberHistory,
    IssueBook,
    ReturnBook,
}

impl Endpoint {
    pub const ALL: [Endpoint; 14] = [
        Endpoint::AllBooks,
        Endpoint::AvailableBooks,
        Endpoint::IssuedBooks,
        Endpoint::BookByIsbn,
        Endpoint::BookByTitle,
        Endpoint::BookByAuthor,
        Endpoint::AllMembers,
        Endpoint::MemberByUid,
        Endpoint::MemberByName,
        Endpoint::MemberByContactNum,
        Endpoint::MemberCurrentBook,
        Endpoint::MemberHistory,
        Endpoint::IssueBook,
        Endpoint::ReturnBook,
    ];

    /// Endpoints enabled when nothing else is configured: everything except
    /// the lookups that share a path shape with a primary-key lookup.
    pub fn defaults() -> Vec<Endpoint> {
        Self::ALL
            .into_iter()
            .filter(|endpoint| {
                !matches!(
                    endpoint,
                    Endpoint::BookByTitle
                        | Endpoint::BookByAuthor
                        | Endpoint::MemberByName
                        | Endpoint::MemberByContactNum
                )
            })
            .collect()
    }

    /// Stable identifier used in configuration and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Endpoint::AllBooks => "all-books",
            Endpoint::AvailableBooks => "available-books",
            Endpoint::IssuedBooks => "issued-books",
            Endpoint::BookByIsbn => "book-by-isbn",
            Endpoint::BookByTitle => "book-by-title",
            Endpoint::BookByAuthor => "book-by-author",
            Endpoint::AllMembers => "all-members",
            Endpoint::MemberByUid => "member-by-uid",
            Endpoint::MemberByName => "member-by-name",
            Endpoint::MemberByContactNum => "member-by-contact-num",
            Endpoint::MemberCurrentBook => "member-current-book",
            Endpoint::MemberHistory => "member-history",
            Endpoint::IssueBook => "issue-book",
            Endpoint::ReturnBook => "return-book",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::IssueBook | Endpoint::ReturnBook => Method::Patch,
            _ => Method::Get,
        }
    }

    /// Route path in axum syntax, which is also the OpenAPI path.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AllBooks => "/books",
            Endpoint::AvailableBooks => "/available-books",
            Endpoint::IssuedBooks => "/issued-books",
            Endpoint::BookByIsbn => "/books/{isbn}",
            Endpoint::BookByTitle => "/books/{title}",
            Endpoint::BookByAuthor => "/books/{author}",
            Endpoint::AllMembers => "/members",
            Endpoint::MemberByUid => "/members/{uid}",
            Endpoint::MemberByName => "/members/{name}",
            Endpoint::MemberByContactNum => "/members/{contactnum}",
            Endpoint::MemberCurrentBook => "/members/{uid}/current",
            Endpoint::MemberHistory => "/members/{uid}/history",
            Endpoint::IssueBook => "/issue",
            Endpoint::ReturnBook => "/return",
        }
    }

    /// Name of the path parameter, if the route has one.
    pub fn path_param(&self) -> Option<&'static str> {
        let path = self.path();
        let start = path.find('{')?;
        let end = path[start..].find('}')? + start;
        Some(&path[start + 1..end])
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Endpoint::AllBooks => "Get all books in the catalog",
            Endpoint::AvailableBooks => "Get books available for issue",
            Endpoint::IssuedBooks => "Get all issued books",
            Endpoint::BookByIsbn => "Get book details by ISBN",
            Endpoint::BookByTitle => "Find a book by title",
            Endpoint::BookByAuthor => "Find a book by author",
            Endpoint::AllMembers => "Get all members",
            Endpoint::MemberByUid => "Get member details by UID",
            Endpoint::MemberByName => "Find a member by name",
            Endpoint::MemberByContactNum => "Find a member by contact number",
            Endpoint::MemberCurrentBook => "Get the book currently issued to a member",
            Endpoint::MemberHistory => "Get the books previously issued to a member",
            Endpoint::IssueBook => "Issue a book",
            Endpoint::ReturnBook => "Return a book",
        }
    }

    /// Whether the router could not hold both routes: either the paths are
    /// the same once parameter names are ignored, or they put differently
    /// named parameters at the same position under a shared prefix.
    fn conflicts_with(&self, other: &Endpoint) -> bool {
        let ours: Vec<&str> = self.path().split('/').collect();
        let theirs: Vec<&str> = other.path().split('/').collect();

        for (a, b) in ours.iter().zip(theirs.iter()) {
            match (a.starts_with('{'), b.starts_with('{')) {
                (true, true) if a != b => return true,
                (true, true) => {}
                (false, false) if a == b => {}
                _ => return false,
            }
        }
        ours.len() == theirs.len()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Endpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.slug() == s)
            .ok_or_else(|| anyhow!("unknown endpoint '{}'", s))
    }
}

/// A validated, ordered set of endpoints to mount on one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    endpoints: Vec<Endpoint>,
}

impl EndpointSet {
    /// Deduplicates while keeping first-seen order and rejects endpoints
    /// whose routes conflict.
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> anyhow::Result<Self> {
        let mut accepted: Vec<Endpoint> = Vec::new();
        for endpoint in endpoints {
            if accepted.contains(&endpoint) {
                continue;
            }
            if let Some(existing) = accepted
                .iter()
                .find(|other| other.conflicts_with(&endpoint))
            {
                bail!(
                    "endpoint '{}' ({}) conflicts with '{}' ({}); enable only one of them",
                    endpoint,
                    endpoint.path(),
                    existing,
                    existing.path()
                );
            }
            accepted.push(endpoint);
        }

        if accepted.is_empty() {
            bail!("at least one endpoint must be enabled");
        }

        Ok(Self {
            endpoints: accepted,
        })
    }

    pub fn single(endpoint: Endpoint) -> Self {
        Self {
            endpoints: vec![endpoint],
        }
    }

    pub fn contains(&self, endpoint: Endpoint) -> bool {
        self.endpoints.contains(&endpoint)
    }

    pub fn iter(&self) -> impl Iterator<Item = Endpoint> + '_ {
        self.endpoints.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for EndpointSet {
    fn default() -> Self {
        Self {
            endpoints: Endpoint::defaults(),
        }
    }
}
