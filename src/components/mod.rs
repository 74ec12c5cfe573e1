pub mod knowledge_tree;
