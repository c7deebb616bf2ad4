//! 显式搜索树
//!
//! 节点存放在连续数组中，通过 [`NodeId`] 相互引用。
//! 树只在一次搜索期间存在，选出走法后即被丢弃。

use std::fmt;

/// 节点编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 节点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// 尚未展开
    Unexpanded,
    /// 已展开，等待子节点评分
    Expanded,
    /// 已评分
    Scored(i32),
}

/// 搜索树节点
#[derive(Debug, Clone)]
pub struct TreeNode<S> {
    state: S,
    children: Vec<NodeId>,
    status: NodeStatus,
    on_resolved_path: bool,
}

impl<S> TreeNode<S> {
    fn new(state: S) -> Self {
        Self {
            state,
            children: Vec::new(),
            status: NodeStatus::Unexpanded,
            on_resolved_path: false,
        }
    }

    /// 节点对应的局面
    pub fn state(&self) -> &S {
        &self.state
    }

    /// 子节点（按走法枚举顺序）
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    /// 已评分时返回分数
    pub fn score(&self) -> Option<i32> {
        match self.status {
            NodeStatus::Scored(score) => Some(score),
            _ => None,
        }
    }

    /// 是否属于正在求解的路径（根节点的直接子节点）
    pub fn on_resolved_path(&self) -> bool {
        self.on_resolved_path
    }
}

/// 搜索树
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<TreeNode<S>>,
}

impl<S> SearchTree<S> {
    /// 以指定局面为根创建
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![TreeNode::new(root_state)],
        }
    }

    /// 根节点
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// 节点总数
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &TreeNode<S> {
        &self.nodes[id.0]
    }

    /// 节点分数
    pub fn score(&self, id: NodeId) -> Option<i32> {
        self.node(id).score()
    }

    /// 在父节点下追加一个未展开的子节点
    pub fn add_child(&mut self, parent: NodeId, state: S) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(state));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn mark_expanded(&mut self, id: NodeId) {
        self.nodes[id.0].status = NodeStatus::Expanded;
    }

    pub(crate) fn set_score(&mut self, id: NodeId, score: i32) {
        self.nodes[id.0].status = NodeStatus::Scored(score);
    }

    pub(crate) fn set_on_resolved_path(&mut self, id: NodeId, flag: bool) {
        self.nodes[id.0].on_resolved_path = flag;
    }
}
