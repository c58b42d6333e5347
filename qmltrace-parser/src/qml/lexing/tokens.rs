//! Token definitions for QML and JavaScript
//!
//! Keywords are the reserved words of JavaScript; everything QML adds on top is
//! contextual and lexes as [`Token::Identifier`].
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\x0B\f\u{feff}\u{2028}\u{2029}\p{Zs}]+")]
#[logos(skip r"//[^\n\r\u{2028}\u{2029}]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    // Punctuators
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token(">>>")]
    GtGtGt,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("^")]
    Xor,
    #[token("!")]
    Not,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("??")]
    QuestionQuestion,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Equal,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("**=")]
    StarStarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    LtLtEq,
    #[token(">>=")]
    GtGtEq,
    #[token(">>>=")]
    GtGtGtEq,
    #[token("&=")]
    AndEq,
    #[token("|=")]
    OrEq,
    #[token("^=")]
    XorEq,

    // Reserved words
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("debugger")]
    Debugger,
    #[token("default")]
    Default,
    #[token("delete")]
    Delete,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("finally")]
    Finally,
    #[token("for")]
    For,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("in")]
    In,
    #[token("instanceof")]
    InstanceOf,
    #[token("let")]
    Let,
    #[token("new")]
    New,
    #[token("null")]
    Null,
    #[token("return")]
    Return,
    #[token("switch")]
    Switch,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("true")]
    True,
    #[token("try")]
    Try,
    #[token("typeof")]
    TypeOf,
    #[token("var")]
    Var,
    #[token("void")]
    Void,
    #[token("while")]
    While,
    #[token("with")]
    With,

    // Literals and names
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Identifier,
    #[regex(r"([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,
    #[regex(r#""([^"\\\n]|\\(.|\n|\r\n))*""#)]
    #[regex(r#"'([^'\\\n]|\\(.|\n|\r\n))*'"#)]
    String,
}

impl Token {
    /// Reserved words. They may still appear after `.` and as object keys.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Break
                | Token::Case
                | Token::Catch
                | Token::Const
                | Token::Continue
                | Token::Debugger
                | Token::Default
                | Token::Delete
                | Token::Do
                | Token::Else
                | Token::False
                | Token::Finally
                | Token::For
                | Token::Function
                | Token::If
                | Token::In
                | Token::InstanceOf
                | Token::Let
                | Token::New
                | Token::Null
                | Token::Return
                | Token::Switch
                | Token::This
                | Token::Throw
                | Token::True
                | Token::Try
                | Token::TypeOf
                | Token::Var
                | Token::Void
                | Token::While
                | Token::With
        )
    }

    /// Tokens usable wherever a property name is expected (`a.default`, `{ if: 1 }`)
    pub fn is_identifier_name(&self) -> bool {
        *self == Token::Identifier || self.is_keyword()
    }

    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::PlusEq
                | Token::MinusEq
                | Token::StarEq
                | Token::StarStarEq
                | Token::SlashEq
                | Token::PercentEq
                | Token::LtLtEq
                | Token::GtGtEq
                | Token::GtGtGtEq
                | Token::AndEq
                | Token::OrEq
                | Token::XorEq
        )
    }

    /// `var`, `let` or `const`
    pub fn is_declaration_kind(&self) -> bool {
        matches!(self, Token::Var | Token::Let | Token::Const)
    }

    /// How the token is spelled, or what it is for tokens without a fixed spelling
    pub fn spelling(&self) -> &'static str {
        match self {
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::Dot => ".",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Le => "<=",
            Token::Ge => ">=",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::EqEqEq => "===",
            Token::NotEqEq => "!==",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::StarStar => "**",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::LtLt => "<<",
            Token::GtGt => ">>",
            Token::GtGtGt => ">>>",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Not => "!",
            Token::Tilde => "~",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::QuestionQuestion => "??",
            Token::Question => "?",
            Token::Colon => ":",
            Token::Equal => "=",
            Token::PlusEq => "+=",
            Token::MinusEq => "-=",
            Token::StarEq => "*=",
            Token::StarStarEq => "**=",
            Token::SlashEq => "/=",
            Token::PercentEq => "%=",
            Token::LtLtEq => "<<=",
            Token::GtGtEq => ">>=",
            Token::GtGtGtEq => ">>>=",
            Token::AndEq => "&=",
            Token::OrEq => "|=",
            Token::XorEq => "^=",
            Token::Break => "break",
            Token::Case => "case",
            Token::Catch => "catch",
            Token::Const => "const",
            Token::Continue => "continue",
            Token::Debugger => "debugger",
            Token::Default => "default",
            Token::Delete => "delete",
            Token::Do => "do",
            Token::Else => "else",
            Token::False => "false",
            Token::Finally => "finally",
            Token::For => "for",
            Token::Function => "function",
            Token::If => "if",
            Token::In => "in",
            Token::InstanceOf => "instanceof",
            Token::Let => "let",
            Token::New => "new",
            Token::Null => "null",
            Token::Return => "return",
            Token::Switch => "switch",
            Token::This => "this",
            Token::Throw => "throw",
            Token::True => "true",
            Token::Try => "try",
            Token::TypeOf => "typeof",
            Token::Var => "var",
            Token::Void => "void",
            Token::While => "while",
            Token::With => "with",
            Token::Identifier => "identifier",
            Token::Number => "numeric literal",
            Token::String => "string literal",
        }
    }
}
