/// Output naming templates for the three artifact kinds.
///
/// `[dir]`, `[name]`, `[hash]` and `[ext]` are placeholder tokens the
/// external bundler substitutes at write time. The planner never resolves
/// them; it only decides which literal/placeholder combination applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingTemplate {
  pub entry: String,
  pub chunk: String,
  pub asset: String,
}
