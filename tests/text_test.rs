//! Stringification: native conversion first, formatting fallback otherwise

use std::fmt;

use tola_compat::prelude::*;

#[derive(TextCaps)]
struct Celsius(f32);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl fmt::Debug for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Celsius({})", self.0)
    }
}

#[derive(Debug, TextCaps)]
struct Settings {
    retries: u8,
    verbose: bool,
}

#[derive(Debug, TextCaps)]
#[text_caps(display(T))]
struct Shown<T>(T);

impl<T: fmt::Display> fmt::Display for Shown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

#[derive(Debug, TextCaps)]
struct Wrapped<T>(T);

#[derive(Debug, TextCaps)]
#[text_caps(display)]
struct Unit<T>(std::marker::PhantomData<T>);

impl<T> fmt::Display for Unit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<T>())
    }
}

fn describe<T>(value: T) -> String
where
    T: TextCaps,
    T::Native: tola_compat::specialize::BoolMethodCall<
            tola_compat::text::NativeText,
            tola_compat::text::FormatText,
            T,
            String,
        >,
{
    to_string(value)
}

#[test]
fn test_integer_text() {
    assert_eq!(to_string!(42), "42");
    assert_eq!(to_string!(-7), "-7");
    assert_eq!(to_string!(0u8), "0");
    assert_eq!(to_string!(i32::MIN), i32::MIN.to_string());
    assert_eq!(to_string!(i32::MAX), i32::MAX.to_string());
    assert_eq!(to_string!(u128::MAX), "340282366920938463463374607431768211455");
}

#[test]
fn test_native_preferred_over_format() {
    assert_eq!(to_string!(Celsius(21.5)), "21.5°C");
    assert_eq!(to_string(Celsius(21.5)), "21.5°C");
    assert_eq!(describe(Celsius(-3.0)), "-3°C");
}

#[test]
fn test_format_fallback() {
    let settings = Settings { retries: 3, verbose: true };
    let expected = format!("{settings:?}");
    assert_eq!(to_string!(settings), expected);
    assert_eq!(to_string(settings), expected);
}

#[test]
fn test_generic_derives() {
    assert_eq!(to_string(Shown(5)), "<5>");
    assert_eq!(to_string(Shown("inner")), "<inner>");
    assert_eq!(to_string(Unit::<u8>(std::marker::PhantomData)), "u8");
    assert_eq!(to_string(Wrapped(5)), "Wrapped(5)");
    assert_eq!(to_string!(Wrapped("x")), "Wrapped(\"x\")");
}

#[test]
fn test_conditional_display_falls_back() {
    // Shown<T> is Display only when T is; a Debug-only T takes the Debug path.
    assert_eq!(to_string(Shown(vec![1u8])), "Shown([1])");
    assert_eq!(describe(Shown(Some('x'))), "Shown(Some('x'))");
    assert_eq!(describe(Shown(Shown(7))), "<<7>>");
}

#[test]
fn test_std_types() {
    assert_eq!(describe(String::from("owned")), "owned");
    assert_eq!(describe(Box::new(1.25)), "1.25");
    assert_eq!(describe(std::rc::Rc::new('r')), "r");
    assert_eq!(describe(vec![Some(1), None]), "[Some(1), None]");
    assert_eq!(describe(std::net::Ipv4Addr::LOCALHOST), "127.0.0.1");
    assert_eq!(describe(std::time::Duration::from_millis(1500)), "1.5s");
    assert_eq!(describe(()), "()");
    assert_eq!(describe((1, 'a')), "(1, 'a')");
}

#[test]
fn test_same_value_same_text() {
    let a = describe(Settings { retries: 1, verbose: false });
    let b = describe(Settings { retries: 1, verbose: false });
    assert_eq!(a, b);
    assert_eq!(to_string!(1.0f64 / 3.0), to_string!(1.0f64 / 3.0));
}
