mod card_vm;
mod editor_vm;
mod study_vm;

pub use card_vm::{
    CardListItemVm, StackCardVm, SWIPE_THRESHOLD, TAP_SLOP, VISIBLE_STACK, is_tap,
    map_card_list_items, map_stack_cards, swipe_verdict,
};
pub use editor_vm::EditorVm;
pub use study_vm::StudyVm;
