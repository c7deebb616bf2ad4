//! 容器：栈与随机袋

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ContainerError;

/// 可添加、可取出的容器
pub trait Container<T> {
    /// 放入元素
    fn add(&mut self, item: T);

    /// 按容器自身的策略取出一个元素
    fn remove(&mut self) -> Result<T, ContainerError>;

    /// 元素个数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 栈：后进先出
#[derive(Debug, Clone)]
pub struct Stack<T> {
    contents: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
        }
    }

    /// 查看栈顶元素
    pub fn peek(&self) -> Option<&T> {
        self.contents.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for Stack<T> {
    fn add(&mut self, item: T) {
        self.contents.push(item);
    }

    fn remove(&mut self) -> Result<T, ContainerError> {
        self.contents
            .pop()
            .ok_or(ContainerError::Empty { kind: "stack" })
    }

    fn len(&self) -> usize {
        self.contents.len()
    }
}

/// 随机袋：每次等概率取出任意一个元素
#[derive(Debug, Clone)]
pub struct Sack<T> {
    contents: Vec<T>,
    rng: ChaCha8Rng,
}

impl<T> Sack<T> {
    /// 使用随机种子创建
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// 使用固定种子创建（结果可复现）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            contents: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<T> Default for Sack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for Sack<T> {
    fn add(&mut self, item: T) {
        self.contents.push(item);
    }

    fn remove(&mut self) -> Result<T, ContainerError> {
        if self.contents.is_empty() {
            return Err(ContainerError::Empty { kind: "sack" });
        }
        let index = self.rng.gen_range(0..self.contents.len());
        Ok(self.contents.swap_remove(index))
    }

    fn len(&self) -> usize {
        self.contents.len()
    }
}

impl<T> Extend<T> for Sack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.contents.extend(iter);
    }
}
