//! Macros for defining rules and building sequences.
//!
//! # Available Macros
//!
//! - [`constraint!`] - define a leaf rule (struct + `Constraint` impl + factory fn)
//! - [`first!`] - a first-failure [`Sequence`](crate::combinators::Sequence)
//! - [`all!`] - an all-failures [`Sequence`](crate::combinators::Sequence)
//! - [`rules!`] - a [`Sequence`](crate::combinators::Sequence) with an explicit semantic
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::{all, constraint, first};
//! use nebula_constraint::foundation::RuleError;
//!
//! constraint! {
//!     pub NotBlank for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { RuleError::new("blank", "cannot be blank") }
//!     fn not_blank();
//! }
//!
//! let password = first![not_blank(), str_len(8, 24), contains_number()];
//! let tags = all![len(2, 12), each_all(all![not_blank(), str_len(2, 8)])];
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a leaf rule: struct definition, `Constraint` implementation,
/// constructor, and factory function.
///
/// `rule` is a boolean block; when it is `false` the `error` block builds the
/// failure. The error block may evaluate to anything that converts into a
/// [`Violation`](crate::foundation::Violation), usually a
/// [`RuleError`](crate::foundation::RuleError).
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// constraint! {
///     pub NotBlank for str;
///     rule(input) { !input.is_empty() }
///     error(input) { RuleError::new("blank", "cannot be blank") }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// constraint! {
///     pub StrMinLen { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { RuleError::new("min_length", format!("must have {} characters at least", self.min)) }
///     fn str_min_len(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`, may assert arguments):
/// ```rust,ignore
/// constraint! {
///     pub StrLen { min: usize, max: usize } for str;
///     rule(self, input) { ... }
///     error(self, input) { ... }
///     new(min: usize, max: usize) { assert!(min <= max); Self { min, max } }
///     fn str_len(min: usize, max: usize);
/// }
/// ```
///
/// **Generic rule** with bounds, and **phantom generic** rules (no bounds,
/// the parameter only appears in the input type) follow the same shape.
#[macro_export]
macro_rules! constraint {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule, no factory ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Constraint for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> $crate::foundation::Outcome {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(::std::convert::Into::into($err))
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::constraint!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    //
    // The type after `->` is the constructor's error type; the macro wraps
    // it in `Result`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::constraint!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::constraint!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + custom new + factory fn ─────────────────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Constraint for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> $crate::foundation::Outcome {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(::std::convert::Into::into($err))
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Phantom generic unit + factory fn ────────────────────────────────
    //
    // For generic rules with no fields and no trait bounds on T.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> ::std::clone::Clone for $name<$gen> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$gen> ::std::marker::Copy for $name<$gen> {}

        impl<$gen> ::std::fmt::Debug for $name<$gen> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<$gen> $crate::foundation::Constraint for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> $crate::foundation::Outcome {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(::std::convert::Into::into($err))
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen>() -> $name<$gen> {
            $name { _phantom: ::std::marker::PhantomData }
        }
    };

    // ── Phantom generic struct + custom new + factory fn ─────────────────
    //
    // For generic rules with fields but no trait bounds on T.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            _phantom: ::std::marker::PhantomData<fn() -> $gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl<$gen> ::std::clone::Clone for $name<$gen> {
            fn clone(&self) -> Self {
                Self { $($field: ::std::clone::Clone::clone(&self.$field),)+ _phantom: ::std::marker::PhantomData }
            }
        }

        impl<$gen> ::std::fmt::Debug for $name<$gen> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }

        impl<$gen> $crate::foundation::Constraint for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> $crate::foundation::Outcome {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(::std::convert::Into::into($err))
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Internal: `Constraint` impl for non-generic structs ──────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Constraint for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> $crate::foundation::Outcome {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(::std::convert::Into::into($err))
                }
            }
        }
    };
}

// ============================================================================
// SEQUENCE MACROS
// ============================================================================

/// Builds a first-failure sequence from the listed rules, in order.
///
/// ```rust,ignore
/// let password = first![not_blank(), str_len(8, 24), contains_number()];
/// ```
#[macro_export]
macro_rules! first {
    ($($rule:expr),* $(,)?) => {
        $crate::rules![$crate::foundation::CheckSemantic::First; $($rule),*]
    };
}

/// Builds an all-failures sequence from the listed rules, in order.
///
/// ```rust,ignore
/// let language = all![not_blank(), str_len(2, 2), one_of(["en", "de", "fr"])];
/// ```
#[macro_export]
macro_rules! all {
    ($($rule:expr),* $(,)?) => {
        $crate::rules![$crate::foundation::CheckSemantic::All; $($rule),*]
    };
}

/// Builds a sequence with the given semantic.
///
/// ```rust,ignore
/// let config = CheckConfig::from_env()?;
/// let name = rules![config.semantic; not_blank(), str_len(2, 50)];
/// ```
#[macro_export]
macro_rules! rules {
    ($semantic:expr; $($rule:expr),* $(,)?) => {
        $crate::combinators::Sequence::new($semantic)$(.rule($rule))*
    };
}

// ============================================================================
// TESTS
// ============================================================================
