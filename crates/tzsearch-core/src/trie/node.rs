// crates/tzsearch-core/src/trie/node.rs

/// A single vertex of the prefix tree.
///
/// Children are kept in a small vector in edge insertion order. City names
/// branch lightly, so a linear scan beats hashing here, and the insertion
/// order gives breadth-first expansion a stable sibling order for free.
pub(crate) struct TrieNode<T> {
    /// Code point on the edge from the parent. `None` only for the root.
    pub(crate) ch: Option<char>,
    pub(crate) children: Vec<TrieNode<T>>,
    pub(crate) is_terminal: bool,
    /// One entry per insert that ended here; `None` when no data was given.
    pub(crate) payloads: Vec<Option<T>>,
}

impl<T> TrieNode<T> {
    pub(crate) fn root() -> Self {
        Self::with_char(None)
    }

    fn with_char(ch: Option<char>) -> Self {
        Self {
            ch,
            children: Vec::new(),
            is_terminal: false,
            payloads: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn child(&self, ch: char) -> Option<&TrieNode<T>> {
        self.children.iter().find(|c| c.ch == Some(ch))
    }

    /// Returns the child for `ch`, creating it if the edge does not exist yet.
    /// The second value is `true` when a node was allocated.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> (&mut TrieNode<T>, bool) {
        match self.children.iter().position(|c| c.ch == Some(ch)) {
            Some(idx) => (&mut self.children[idx], false),
            None => {
                self.children.push(TrieNode::with_char(Some(ch)));
                let last = self.children.len() - 1;
                (&mut self.children[last], true)
            }
        }
    }

    /// Copy of this node without its children.
    fn detached(&self) -> Self
    where
        T: Clone,
    {
        Self {
            ch: self.ch,
            children: Vec::with_capacity(self.children.len()),
            is_terminal: self.is_terminal,
            payloads: self.payloads.clone(),
        }
    }

    /// Marks the node as the end of a term and records the payload entry.
    pub(crate) fn terminate(&mut self, data: Option<T>) {
        self.is_terminal = true;
        self.payloads.push(data);
    }
}

// Depth-first copy driven by an explicit stack; `open` holds the copies whose
// children are still being filled in.
impl<T: Clone> Clone for TrieNode<T> {
    fn clone(&self) -> Self {
        let mut root = self.detached();
        let mut pending: Vec<(&TrieNode<T>, usize)> = vec![(self, 0)];
        let mut open: Vec<TrieNode<T>> = Vec::new();

        while let Some(top) = pending.last_mut() {
            let node: &TrieNode<T> = top.0;
            match node.children.get(top.1) {
                Some(child) => {
                    top.1 += 1;
                    pending.push((child, 0));
                    open.push(child.detached());
                }
                None => {
                    pending.pop();
                    if let Some(done) = open.pop() {
                        match open.last_mut() {
                            Some(parent) => parent.children.push(done),
                            None => root.children.push(done),
                        }
                    }
                }
            }
        }
        root
    }
}

// Flatten the subtree before dropping so long terms cannot exhaust the stack.
impl<T> Drop for TrieNode<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
