use std::net::Ipv4Addr;

/// Ordered list of name servers queried during one hop of iterative resolution.
///
/// Order is significant: servers are tried front to back and the first useful
/// reply wins the hop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerSet(Vec<Ipv4Addr>);

impl ServerSet {
    pub fn new(servers: Vec<Ipv4Addr>) -> Self {
        Self(servers)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4Addr> {
        self.0.iter()
    }

    pub fn extend(&mut self, servers: impl IntoIterator<Item = Ipv4Addr>) {
        self.0.extend(servers);
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.0
    }
}

impl FromIterator<Ipv4Addr> for ServerSet {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ServerSet {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
