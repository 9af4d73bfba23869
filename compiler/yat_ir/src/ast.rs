//! AST node set.
//!
//! Ten immutable node kinds. A program is a sequence of nodes built directly
//! through the constructors below (there is no parser in this workspace);
//! evaluation only ever reads them.

use crate::{BinaryOp, Name, OperatorError, UnaryOp};

/// A user-defined function: ordered parameter names and body statements.
///
/// Functions are values as well as nodes: a `FunctionDefinition` stores a
/// borrow of its `Function` in a scope, and a call evaluates the body against
/// a fresh child scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    params: Vec<Name>,
    body: Vec<Node>,
}

impl Function {
    pub fn new(params: Vec<Name>, body: Vec<Node>) -> Self {
        Function { params, body }
    }

    /// Parameter names in declaration order.
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    /// Body statements in execution order.
    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A single AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Integer literal.
    Number(i64),
    /// Variable or function lookup by name.
    Reference(Name),
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Node> },
    /// `left op right`, left evaluated first.
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Function literal. Evaluating it runs the body in the current scope.
    Function(Function),
    /// Bind `function` under `name` in the current scope.
    FunctionDefinition { name: Name, function: Function },
    /// Call `callee` with positional `args`.
    FunctionCall { callee: Box<Node>, args: Vec<Node> },
    /// `if condition { if_true } else { if_false }`, in the current scope.
    Conditional {
        condition: Box<Node>,
        if_true: Vec<Node>,
        if_false: Option<Vec<Node>>,
    },
    /// Emit the integer value of the expression.
    Print(Box<Node>),
    /// Read one integer and bind it under the name.
    Read(Name),
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    pub fn reference(name: Name) -> Self {
        Node::Reference(name)
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build a unary operation from its source symbol (`-` or `!`).
    pub fn try_unary(symbol: &str, operand: Node) -> Result<Self, OperatorError> {
        Ok(Node::unary(symbol.parse()?, operand))
    }

    pub fn binary(left: Node, op: BinaryOp, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a binary operation from its source symbol.
    pub fn try_binary(left: Node, symbol: &str, right: Node) -> Result<Self, OperatorError> {
        Ok(Node::binary(left, symbol.parse()?, right))
    }

    pub fn function(params: Vec<Name>, body: Vec<Node>) -> Self {
        Node::Function(Function::new(params, body))
    }

    pub fn define(name: Name, function: Function) -> Self {
        Node::FunctionDefinition { name, function }
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::FunctionCall {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn conditional(condition: Node, if_true: Vec<Node>, if_false: Option<Vec<Node>>) -> Self {
        Node::Conditional {
            condition: Box::new(condition),
            if_true,
            if_false,
        }
    }

    pub fn print(expr: Node) -> Self {
        Node::Print(Box::new(expr))
    }

    pub fn read(name: Name) -> Self {
        Node::Read(name)
    }

    /// Node kind, for tracing output.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "Number",
            Node::Reference(_) => "Reference",
            Node::Unary { .. } => "UnaryOperation",
            Node::Binary { .. } => "BinaryOperation",
            Node::Function(_) => "Function",
            Node::FunctionDefinition { .. } => "FunctionDefinition",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::Conditional { .. } => "Conditional",
            Node::Print(_) => "Print",
            Node::Read(_) => "Read",
        }
    }
}
