use super::molecule::Molecule;
use super::types::Role;
use serde::{Deserialize, Serialize};

/// Header text of a `$RXN` record: the three lines between the marker and
/// the counts line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionHeader {
    pub name: String,
    pub program: String,
    pub comment: String,
}

/// A `$DTYPE`/`$DATUM` pair attached to an RDF record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    pub name: String,
    pub value: String,
}

/// A reaction with its molecule templates grouped by role.
///
/// The role of a template is structural: its position relative to the
/// counts declared on the `$RXN` counts line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub header: ReactionHeader,
    pub reactants: Vec<Molecule>,
    pub products: Vec<Molecule>,
    pub agents: Vec<Molecule>,
    pub data: Vec<DataField>,
}

impl Reaction {
    /// Wraps already-decoded templates into a reaction value.
    pub fn assemble(
        header: ReactionHeader,
        reactants: Vec<Molecule>,
        products: Vec<Molecule>,
        agents: Vec<Molecule>,
    ) -> Self {
        Self {
            header,
            reactants,
            products,
            agents,
            data: Vec::new(),
        }
    }

    #[inline]
    pub fn num_reactant_templates(&self) -> usize {
        self.reactants.len()
    }

    #[inline]
    pub fn num_product_templates(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn num_agent_templates(&self) -> usize {
        self.agents.len()
    }

    pub fn templates(&self, role: Role) -> &[Molecule] {
        match role {
            Role::Reactant => &self.reactants,
            Role::Product => &self.products,
            Role::Agent => &self.agents,
        }
    }

    /// All templates in file order, tagged with their role.
    pub fn iter_templates(&self) -> impl Iterator<Item = (Role, &Molecule)> {
        self.reactants
            .iter()
            .map(|m| (Role::Reactant, m))
            .chain(self.products.iter().map(|m| (Role::Product, m)))
            .chain(self.agents.iter().map(|m| (Role::Agent, m)))
    }

    /// Value of the first data field with the given name.
    pub fn datum(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }
}
