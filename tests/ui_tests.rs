use rwaterlogger::ui::messages::confirm_from;
use std::io::Cursor;

#[test]
fn test_confirmation_accepts_y_and_yes() {
    for answer in ["y\n", "yes\n", "Y\n", "  YES  \n"] {
        let mut input = Cursor::new(answer);
        assert!(confirm_from(&mut input, "Clear?"), "{answer:?}");
    }
}

#[test]
fn test_confirmation_rejects_everything_else() {
    for answer in ["n\n", "no\n", "\n", "", "yep\n"] {
        let mut input = Cursor::new(answer);
        assert!(!confirm_from(&mut input, "Clear?"), "{answer:?}");
    }
}
