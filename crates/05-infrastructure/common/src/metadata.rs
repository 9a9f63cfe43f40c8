//! 元数据定义
//!
//! 提供类型标识、类型描述符以及标记的定义

use crate::configuration::AutomapperConfigProvider;
use crate::errors::AutomapperError;
use crate::lifecycle::Lifetime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const COLLECTION_PATH: &str = "automapper::Collection";
const COLLECTION_FACADE_PATH: &str = "automapper::CollectionFacade";
const PLACEHOLDER: &str = "_";

/// 类型标识
///
/// 非泛型类型只有路径；开放泛型定义有元数但没有类型参数；
/// 封闭泛型类型的参数个数与元数相同。
///
/// 文本形式：`a::B`、`a::B<_, _>`（开放定义）、`a::B<c::D, bool>`（封闭）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeKey {
    path: String,
    arity: usize,
    arguments: Vec<TypeKey>,
}

impl TypeKey {
    /// 创建非泛型类型标识
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            arity: 0,
            arguments: Vec::new(),
        }
    }

    /// 创建开放泛型定义
    pub fn generic_definition(path: impl Into<String>, arity: usize) -> Self {
        Self {
            path: path.into(),
            arity,
            arguments: Vec::new(),
        }
    }

    /// 创建封闭泛型类型
    pub fn closed(path: impl Into<String>, arguments: Vec<TypeKey>) -> Self {
        Self {
            path: path.into(),
            arity: arguments.len(),
            arguments,
        }
    }

    /// 集合接口 `automapper::Collection<element>`
    pub fn collection_of(element: &TypeKey) -> Self {
        Self::closed(COLLECTION_PATH, vec![element.clone()])
    }

    /// 集合门面 `automapper::CollectionFacade<element>`
    pub fn collection_facade_of(element: &TypeKey) -> Self {
        Self::closed(COLLECTION_FACADE_PATH, vec![element.clone()])
    }

    /// 完全限定路径（不含泛型参数）
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }

    /// 泛型元数
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// 封闭泛型的类型参数
    pub fn arguments(&self) -> &[TypeKey] {
        &self.arguments
    }

    /// 是否为泛型类型（开放或封闭）
    pub fn is_generic(&self) -> bool {
        self.arity > 0
    }

    /// 是否为开放泛型定义
    pub fn is_generic_definition(&self) -> bool {
        self.arity > 0 && self.arguments.is_empty()
    }

    /// 泛型定义形式，非泛型和开放类型返回自身
    pub fn definition(&self) -> Self {
        if self.is_generic() {
            Self::generic_definition(self.path.clone(), self.arity)
        } else {
            self.clone()
        }
    }

    /// 两个标识是否有相同的泛型定义形式
    pub fn shares_definition_with(&self, other: &TypeKey) -> bool {
        self.path == other.path && self.arity == other.arity
    }

    /// 使用给定的类型参数封闭开放泛型定义
    pub fn make_generic(&self, arguments: &[TypeKey]) -> Result<Self, AutomapperError> {
        if !self.is_generic_definition() {
            return Err(AutomapperError::InvalidGenericArguments {
                type_name: self.to_string(),
                message: "只能封闭开放泛型定义".to_string(),
            });
        }
        if arguments.len() != self.arity {
            return Err(AutomapperError::InvalidGenericArguments {
                type_name: self.to_string(),
                message: format!("期望 {} 个类型参数, 实际 {}", self.arity, arguments.len()),
            });
        }
        Ok(Self::closed(self.path.clone(), arguments.to_vec()))
    }

    /// 集合接口的元素类型
    pub fn collection_element(&self) -> Option<&TypeKey> {
        match self.arguments.as_slice() {
            [element] if self.path == COLLECTION_PATH => Some(element),
            _ => None,
        }
    }

    /// 是否为集合门面类型
    pub fn is_collection_facade(&self) -> bool {
        self.path == COLLECTION_FACADE_PATH && self.arguments.len() == 1
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if self.arity == 0 {
            return Ok(());
        }

        f.write_str("<")?;
        for index in 0..self.arity {
            if index > 0 {
                f.write_str(", ")?;
            }
            match self.arguments.get(index) {
                Some(argument) => write!(f, "{argument}")?,
                None => f.write_str(PLACEHOLDER)?,
            }
        }
        f.write_str(">")
    }
}

impl FromStr for TypeKey {
    type Err = AutomapperError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeKeyParser { input, position: 0 };
        let key = parser.parse_key()?;
        parser.skip_whitespace();
        if parser.position != input.len() {
            return Err(parser.error("类型标识后存在多余的字符"));
        }
        Ok(key)
    }
}

impl TryFrom<String> for TypeKey {
    type Error = AutomapperError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeKey> for String {
    fn from(key: TypeKey) -> Self {
        key.to_string()
    }
}

struct TypeKeyParser<'a> {
    input: &'a str,
    position: usize,
}

impl TypeKeyParser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    fn error(&self, message: &str) -> AutomapperError {
        AutomapperError::TypeKeyParse {
            input: self.input.to_string(),
            message: format!("{message} (位置 {})", self.position),
        }
    }

    fn parse_path(&mut self) -> Result<String, AutomapperError> {
        self.skip_whitespace();
        let start = self.position;
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_' || c == ':' || c == '.') {
                break;
            }
            self.position += c.len_utf8();
        }
        if start == self.position {
            return Err(self.error("缺少类型路径"));
        }
        Ok(self.input[start..self.position].to_string())
    }

    fn parse_key(&mut self) -> Result<TypeKey, AutomapperError> {
        let path = self.parse_path()?;
        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(TypeKey::new(path));
        }
        self.position += 1;

        let mut arguments = Vec::new();
        let mut placeholders = 0;
        loop {
            match self.parse_argument()? {
                Some(argument) => arguments.push(argument),
                None => placeholders += 1,
            }
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.position += 1,
                Some('>') => {
                    self.position += 1;
                    break;
                }
                _ => return Err(self.error("期望 ',' 或 '>'")),
            }
        }

        match (arguments.is_empty(), placeholders) {
            (true, arity) => Ok(TypeKey::generic_definition(path, arity)),
            (false, 0) => Ok(TypeKey::closed(path, arguments)),
            _ => Err(self.error("不支持部分封闭的泛型类型")),
        }
    }

    fn parse_argument(&mut self) -> Result<Option<TypeKey>, AutomapperError> {
        let key = self.parse_key()?;
        if key.path == PLACEHOLDER && !key.is_generic() {
            Ok(None)
        } else {
            Ok(Some(key))
        }
    }
}

/// 类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// 接口（可作为映射的来源）
    Interface,
    /// 具体类型（可作为映射的目标）
    Concrete,
}

/// 类型标记
///
/// 等价于声明在类型或方法上的特性，配置模型只读取它们的语义
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// 不参与映射
    DoNotMap,
    /// 单例生命周期
    Singleton,
    /// 自定义生命周期
    CustomLifetime(Lifetime),
    /// 允许多个实现映射到同一接口
    Multimap,
    /// 需要策略注入
    PolicyInjection,
    /// 显式注册名称
    MapAs(String),
    /// 调用处理器，存在时映射需要拦截
    CallHandler(String),
}

/// 方法描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// 方法名称
    pub name: String,
    /// 方法上的标记
    pub markers: Vec<Marker>,
}

impl MethodDescriptor {
    /// 创建新的方法描述
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// 类型描述符
///
/// 来自外部类型系统的不可变描述，映射引擎只使用它的能力面
#[derive(Clone)]
pub struct TypeDescriptor {
    /// 类型标识
    pub key: TypeKey,
    /// 类型种类
    pub kind: TypeKind,
    /// 声明实现的接口
    pub interfaces: Vec<TypeKey>,
    /// 类型上的标记
    pub markers: Vec<Marker>,
    /// 方法描述
    pub methods: Vec<MethodDescriptor>,
    /// 显式配置提供者
    pub config_provider: Option<Arc<dyn AutomapperConfigProvider>>,
}

impl TypeDescriptor {
    /// 创建新的类型描述符
    pub fn new(key: TypeKey, kind: TypeKind) -> Self {
        Self {
            key,
            kind,
            interfaces: Vec::new(),
            markers: Vec::new(),
            methods: Vec::new(),
            config_provider: None,
        }
    }

    /// 创建接口描述符
    pub fn interface(key: TypeKey) -> Self {
        Self::new(key, TypeKind::Interface)
    }

    /// 创建具体类型描述符
    pub fn concrete(key: TypeKey) -> Self {
        Self::new(key, TypeKind::Concrete)
    }

    /// 声明实现的接口
    pub fn implements(mut self, interface: TypeKey) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// 添加方法
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// 附加配置提供者
    pub fn with_config_provider(mut self, provider: Arc<dyn AutomapperConfigProvider>) -> Self {
        self.config_provider = Some(provider);
        self
    }

    /// 是否为接口
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// 是否为开放泛型定义
    pub fn is_generic_open(&self) -> bool {
        self.key.is_generic_definition()
    }

    /// 声明实现的接口
    pub fn implemented_interfaces(&self) -> &[TypeKey] {
        &self.interfaces
    }

    /// 是否带有指定标记
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }

    /// 类型本身或任意方法上是否带有调用处理器
    pub fn has_call_handlers(&self) -> bool {
        let is_handler = |marker: &Marker| matches!(marker, Marker::CallHandler(_));
        self.markers.iter().any(is_handler)
            || self
                .methods
                .iter()
                .any(|method| method.markers.iter().any(is_handler))
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("interfaces", &self.interfaces)
            .field("markers", &self.markers)
            .field("methods", &self.methods)
            .field(
                "config_provider",
                &self.config_provider.as_ref().map(|_| "<provider>"),
            )
            .finish()
    }
}
