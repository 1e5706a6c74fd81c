/// The word to hand to the operator and what they get to look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub word: String,
    pub preview: Vec<String>,
}
