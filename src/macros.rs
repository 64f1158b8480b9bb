//! Crate-local macros.

/// Converts the given `f64` literal or expression to the
/// floating point type `F`.
macro_rules! float_from {
    ($f:ty, $value:expr) => {
        <$f as ::num_traits::FromPrimitive>::from_f64($value).unwrap()
    };
}

/// Implements arithmetic with a concrete floating point scalar on the
/// left hand side of the given generic type, by delegating to the
/// corresponding right hand side implementation.
macro_rules! impl_scalar_lhs_ops {
    ($type:ident; $($f:ty),+; with_add_sub) => {
        impl_scalar_lhs_ops!($type; $($f),+);
        $(
            impl ::std::ops::Add<$type<$f>> for $f {
                type Output = $type<$f>;
                fn add(self, rhs: $type<$f>) -> $type<$f> {
                    rhs + self
                }
            }

            impl ::std::ops::Sub<$type<$f>> for $f {
                type Output = $type<$f>;
                #[allow(clippy::suspicious_arithmetic_impl)]
                fn sub(self, rhs: $type<$f>) -> $type<$f> {
                    -rhs + self
                }
            }
        )+
    };
    ($type:ident; $($f:ty),+) => {
        $(
            impl ::std::ops::Mul<$type<$f>> for $f {
                type Output = $type<$f>;
                fn mul(self, rhs: $type<$f>) -> $type<$f> {
                    rhs * self
                }
            }
        )+
    };
}

/// Formats the given components with the formatter's precision,
/// falling back to two decimals.
macro_rules! write_fixed {
    ($f:expr, $template:literal, $($component:expr),+ $(,)?) => {{
        let precision = $f.precision().unwrap_or(2);
        write!($f, $template, $(precision, $component),+)
    }};
}
