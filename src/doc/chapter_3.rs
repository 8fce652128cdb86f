/*!
# Commands

Commands are typed at the `BASIC>` prompt and are never part of a program.
A line starting with a number is stored in the program instead;
a number with nothing after it deletes that line.
*/

pub mod LIST {
    /*!
    ## `LIST` Shows the program in line number order.
    ```text
    BASIC> 20 PRINT 2
    BASIC> 10 PRINT 1
    BASIC> LIST
    10 PRINT 1
    20 PRINT 2
    ```
    */
}

pub mod LOAD {
    /*!
    ## `LOAD <filename>` Replaces the program with one from a file.
    Each line of the file is a line number and a statement. Blank lines
    are skipped and a line holding only a number deletes that line.
    A line without a number stops the load with `DIRECT STATEMENT IN FILE`.
    ```text
    BASIC> LOAD hello.bas
    BASIC> RUN
    HELLO
    ```
    */
}

pub mod NEW {
    /*!
    ## `NEW` Erases the program and all variables.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Runs the program from its first line.
    All variables are reset to 0, all arrays are removed and no loops
    are active. Stop a running program with CTRL-C.
    ```text
    BASIC> 10 PRINT "HI"
    BASIC> RUN
    HI
    ```
    */
}

pub mod SAVE {
    /*!
    ## `SAVE <filename>` Writes the program to a file.
    Lines are written exactly as `LIST` shows them. An empty program
    makes an empty file.
    */
}

pub mod QUIT {
    /*!
    ## `QUIT` or `EXIT` Leaves BASIC. So does CTRL-D.
    */
}
