//! Node storage for [`CircularList`](crate::CircularList).
//!
//! Nodes are kept in a `Vec`-backed arena and refer to their neighbours by
//! [`NodeId`], so the ring holds no owning cycles. Slot 0 is the ghost node:
//! it is allocated with the arena, never freed, and never holds an element.
//! Freed slots are recycled by later insertions.

/// Index of a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const GHOST: NodeId = NodeId(0);

    pub(crate) fn is_ghost(self) -> bool {
        self == Self::GHOST
    }
}

pub(crate) struct Node<T> {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
    /// `None` for the ghost node and for free slots.
    pub(crate) element: Option<T>,
}

pub(crate) struct NodeArena<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    /// Create an arena holding only the ghost node, linked to itself.
    pub(crate) fn new() -> Self {
        let ghost = Node {
            next: NodeId::GHOST,
            prev: NodeId::GHOST,
            element: None,
        };
        Self {
            nodes: vec![ghost],
            free: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn next(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].next
    }

    #[inline]
    pub(crate) fn prev(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].prev
    }

    #[inline]
    pub(crate) fn element(&self, node: NodeId) -> Option<&T> {
        self.nodes[node.0].element.as_ref()
    }

    #[inline]
    pub(crate) fn element_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes[node.0].element.as_mut()
    }

    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.nodes[prev.0].next = next;
        self.nodes[next.0].prev = prev;
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Splice a new node holding `element` right after `at` and return it.
    ///
    /// This operation should compute in *O*(1) time (amortized, when the
    /// arena has to grow).
    pub(crate) fn insert_after(&mut self, at: NodeId, element: T) -> NodeId {
        let next = self.next(at);
        #[cfg(debug_assertions)]
        self.assert_adjacent(at, next);
        let node = self.alloc(Node {
            next,
            prev: at,
            element: Some(element),
        });
        self.connect(at, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(at, node);
            self.assert_adjacent(node, next);
        }
        node
    }

    /// Detach `node` from the ring, connecting its neighbours directly, and
    /// return its element. The slot goes back to the free list, so `node`
    /// must not be used again.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the ghost node or an already freed slot.
    pub(crate) fn unlink(&mut self, node: NodeId) -> T {
        debug_assert!(!node.is_ghost(), "cannot unlink the ghost node");
        let (prev, next) = (self.prev(node), self.next(node));
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        self.connect(prev, next);
        let element = self.nodes[node.0]
            .element
            .take()
            .expect("unlinked a node without an element");
        self.nodes[node.0].next = node;
        self.nodes[node.0].prev = node;
        self.free.push(node);
        element
    }

    /// Number of slots in use, the ghost node included.
    pub(crate) fn occupied(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Move the elements out in ring order, starting after the ghost node.
    pub(crate) fn into_elements(mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.occupied() - 1);
        let mut node = self.next(NodeId::GHOST);
        while !node.is_ghost() {
            elements.extend(self.nodes[node.0].element.take());
            node = self.next(node);
        }
        elements
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next(prev), next);
        assert_eq!(self.prev(next), prev);
    }
}
