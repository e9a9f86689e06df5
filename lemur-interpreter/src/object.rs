use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::ast::{BlockStatement, Identifier};

pub type RObject = Rc<Object>;
pub type MutableEnvironment = Rc<RefCell<Environment>>;

/// A runtime value. `Return` is not a user-visible value; it wraps the
/// result of a `return` statement so block evaluation can unwind to the
/// nearest call boundary.
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    Return(RObject),
    Function(Function),
}

/// A function value: shared parameter list and body from the literal, plus
/// the environment captured at definition time.
pub struct Function {
    pub environment: MutableEnvironment,
    pub parameters: Rc<Vec<Identifier>>,
    pub body: Rc<BlockStatement>,
}

impl Function {
    fn inspect(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(|p| p.name.clone())
            .collect::<Vec<String>>()
            .join(", ");
        format!("fun({}) {{\n{}\n}}", parameters, self.body)
    }
}

impl Object {
    /// Debug rendering of the value.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            Object::Return(value) => value.inspect(),
            Object::Function(function) => function.inspect(),
        }
    }

    /// Type tag used for dispatch and error messages.
    pub fn type_name(&self) -> String {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN",
            Object::Function(_) => "FUNCTION",
        }
        .to_string()
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Object::Return(_))
    }

    pub fn get_return(&self) -> Option<RObject> {
        match self {
            Object::Return(value) => Some(Rc::clone(value)),
            _ => None,
        }
    }

    pub fn get_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }
}

/// A name-to-value mapping with an optional enclosing scope. Lookup walks
/// the chain outward; writes always land in the local scope.
pub struct Environment {
    parent: Option<MutableEnvironment>,
    store: HashMap<String, RObject>,
}

impl Environment {
    pub fn new() -> MutableEnvironment {
        Rc::new(RefCell::new(Environment {
            parent: None,
            store: HashMap::new(),
        }))
    }

    pub fn new_enclosed(parent: &MutableEnvironment) -> MutableEnvironment {
        Rc::new(RefCell::new(Environment {
            parent: Some(Rc::clone(parent)),
            store: HashMap::new(),
        }))
    }

    pub fn get(&self, name: &str) -> Option<RObject> {
        match self.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => self
                .parent
                .as_ref()
                .and_then(|parent| parent.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: &str, value: &RObject) {
        self.store.insert(name.to_owned(), Rc::clone(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_scalars() {
        assert_eq!(Object::Integer(5).inspect(), "5");
        assert_eq!(Object::Integer(-10).inspect(), "-10");
        assert_eq!(Object::Boolean(true).inspect(), "true");
        assert_eq!(Object::Null.inspect(), "null");
        assert_eq!(
            Object::Return(Rc::new(Object::Integer(7))).inspect(),
            "7"
        );
    }

    #[test]
    fn environment_lookup_walks_outward() {
        let outer = Environment::new();
        outer
            .borrow_mut()
            .set("x", &Rc::new(Object::Integer(1)));

        let inner = Environment::new_enclosed(&outer);
        inner
            .borrow_mut()
            .set("y", &Rc::new(Object::Integer(2)));

        assert_eq!(inner.borrow().get("x").unwrap().get_integer(), Some(1));
        assert_eq!(inner.borrow().get("y").unwrap().get_integer(), Some(2));
        assert!(inner.borrow().get("z").is_none());

        // Shadowing stays local.
        inner
            .borrow_mut()
            .set("x", &Rc::new(Object::Integer(3)));
        assert_eq!(inner.borrow().get("x").unwrap().get_integer(), Some(3));
        assert_eq!(outer.borrow().get("x").unwrap().get_integer(), Some(1));
    }
}
