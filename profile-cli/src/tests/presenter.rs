use crate::presenter::opener_command;

#[test]
fn test_opener_passes_url_as_last_argument() {
    let url = "https://wa.me/0716304517?text=Hello%20from%20your%20app";

    let (program, args) = opener_command(url);

    assert!(!program.is_empty());
    assert_eq!(args.last().map(String::as_str), Some(url));
}

#[cfg(target_os = "linux")]
#[test]
fn test_linux_uses_xdg_open() {
    let (program, args) = opener_command("tel:+254716304517");

    assert_eq!(program, "xdg-open");
    assert_eq!(args, vec![String::from("tel:+254716304517")]);
}
